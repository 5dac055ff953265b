mod menu_dto;

pub use menu_dto::MenuCategoryDto;
