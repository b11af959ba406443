pub mod fixture;
pub mod repo_file;

pub use fixture::load_fixture;
pub use repo_file::RepoDefinition;
