//! 数据传输对象：Web Modeler API 的请求体与响应体。
//!
//! # Types Module
//!
//! Request and response bodies of the Web Modeler API.
//!
//! The client does not inspect these payloads; they are serialized and
//! deserialized as-is. Response metadata types keep any field they do not
//! know about in an `extra` map, so nothing the server sends is dropped.
//!
//! ## Submodules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`collaborator`] | Project collaborators and roles |
//! | [`file`] | Files, including connector template helpers |
//! | [`folder`] | Folders |
//! | [`milestone`] | Milestones (file snapshots) |
//! | [`project`] | Projects |
//! | [`search`] | Search envelope, sorting, relative date filters |
//!
//! ## Example
//!
//! ```rust
//! use modeler_client::types::{FileFilter, FileSearch, SortDirection, DateRounding, date_within};
//!
//! let search = FileSearch::new(FileFilter {
//!     project_id: Some("5cb5ab1f-6fd8-4a7f-8b5a-2a5a2c1e0b10".into()),
//!     updated: Some(date_within("2023-09-20T11:31:20.206801604Z", DateRounding::Week)),
//!     ..Default::default()
//! })
//! .sort_by("name", SortDirection::Asc)
//! .size(25);
//! assert_eq!(search.page, 0);
//! ```

pub mod collaborator;
pub mod common;
pub mod file;
pub mod folder;
pub mod info;
pub mod milestone;
pub mod project;
pub mod search;

pub use collaborator::{
    CollaboratorFilter, CollaboratorRole, CollaboratorSearch, CreateCollaboratorDto,
    ProjectCollaboratorDto,
};
pub use common::{ContainerContentDto, PathElementDto, UserDto};
pub use file::{
    CreateFileDto, FileDto, FileFilter, FileMetadataDto, FileSearch, FileType, UpdateFileDto,
    CONNECTOR_TEMPLATE_SCHEMA_URL,
};
pub use folder::{CreateFolderDto, FolderDto, FolderMetadataDto, UpdateFolderDto};
pub use info::InfoDto;
pub use milestone::{
    CreateMilestoneDto, MilestoneDto, MilestoneFilter, MilestoneMetadataDto, MilestoneSearch,
};
pub use project::{ProjectDto, ProjectFilter, ProjectMetadataDto, ProjectSearch};
pub use search::{
    date_within, DateRounding, SearchRequest, SearchResult, SortDirection, SortField,
    DEFAULT_PAGE_SIZE,
};
