//! 本地镜像实体定义

pub mod channel;
pub mod dns_record;
pub mod domain;
