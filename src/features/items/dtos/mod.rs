mod item_dto;

pub use item_dto::{CreateItemDto, ItemResponseDto, UpdateItemDto};
