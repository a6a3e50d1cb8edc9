mod directory_catalog;

pub use directory_catalog::DirectoryImageCatalog;
