use std::sync::Arc;

use validator::Validate;

use crate::domain::dto::contacts::{ContactMessageResponse, ContactRequest, SubmitContactResponse};
use crate::domain::entities::contacts::contact_message::ContactMessage;
use crate::errors::AppResult;
use crate::repositories::ContactRepository;

/// 문의 접수 서비스
pub struct ContactService {
    contact_repo: Arc<dyn ContactRepository>,
}

impl ContactService {
    pub fn new(contact_repo: Arc<dyn ContactRepository>) -> Self {
        Self { contact_repo }
    }

    /// 문의 메시지를 검증하고 저장합니다.
    ///
    /// 필드가 하나라도 비어 있으면 아무것도 저장하지 않고 `ValidationError`를 반환합니다.
    pub async fn submit(&self, request: ContactRequest) -> AppResult<SubmitContactResponse> {
        request.validate()?;

        let ContactRequest {
            name,
            email,
            message,
        } = request;

        let saved = self
            .contact_repo
            .insert(ContactMessage::new(name, email, message))
            .await?;

        log::info!(
            "📩 문의 접수 완료 - ID: {}, 이메일: {}",
            saved.id_string().unwrap_or_default(),
            saved.email
        );

        Ok(SubmitContactResponse::default())
    }

    /// 저장된 모든 문의 메시지를 반환합니다.
    pub async fn list_all(&self) -> AppResult<Vec<ContactMessageResponse>> {
        let contacts = self.contact_repo.find_all().await?;

        log::debug!("문의 메시지 {}건 조회", contacts.len());

        Ok(contacts.into_iter().map(ContactMessageResponse::from).collect())
    }
}
