pub mod session_dto;
pub mod staged_file_dto;
