//! Controllers — one service per page behavior.

pub mod anchor_service;
pub mod header_service;
pub mod lazy_image_service;
pub mod media_service;
pub mod menu_service;
pub mod reveal_service;
pub mod theme_service;
