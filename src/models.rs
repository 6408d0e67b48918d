pub mod form_dto;
pub mod outcome_dto;
pub mod selected_file_dao;
