//! 문의 접수 응답 DTO

use serde::{Deserialize, Serialize};

use crate::domain::entities::contacts::contact_message::ContactMessage;

/// 문의 접수 완료 응답
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitContactResponse {
    pub message: String,
}

impl Default for SubmitContactResponse {
    fn default() -> Self {
        Self {
            message: "Message sent successfully!".to_string(),
        }
    }
}

/// 문의 메시지 목록 원소
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactMessageResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub message: String,
    /// RFC 3339 형식의 접수 시간
    pub created_at: String,
}

impl From<ContactMessage> for ContactMessageResponse {
    fn from(contact: ContactMessage) -> Self {
        Self {
            id: contact.id_string().unwrap_or_default(),
            created_at: contact
                .created_at
                .try_to_rfc3339_string()
                .unwrap_or_default(),
            name: contact.name,
            email: contact.email,
            message: contact.message,
        }
    }
}
