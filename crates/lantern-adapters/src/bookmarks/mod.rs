mod csv_repository;

pub use csv_repository::CsvBookmarkRepository;
