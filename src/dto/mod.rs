//! DTOs de la API
//!
//! Tipos de request/response por recurso. Los requests llevan derives de
//! `validator`; los responses nunca exponen hashes ni campos internos.

pub mod audit_dto;
pub mod auth_dto;
pub mod booking_dto;
pub mod common;
pub mod parking_dto;
pub mod partner_dto;
pub mod problem_dto;
pub mod settings_dto;
pub mod user_dto;
