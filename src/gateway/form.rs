use crate::domain::model::RefactorRequest;
use crate::utils::error::{FieldIssue, RelayError};
use axum::extract::{FromRequest, Multipart, Request};
use axum::http::{header, HeaderMap, StatusCode};
use axum::Form;

const USER_CODE: &str = "user_code";
const REFACTOR_REQUEST: &str = "refactor_request";

/// Form body of `POST /refactor`, accepted as urlencoded or multipart.
#[derive(Debug)]
pub struct RefactorForm(pub RefactorRequest);

#[derive(Debug, Default)]
struct RawRefactorForm {
    user_code: Option<String>,
    refactor_request: Option<String>,
}

impl RawRefactorForm {
    /// 重複的欄位以最後一個值為準，未知欄位略過
    fn set(&mut self, name: &str, value: String) {
        match name {
            USER_CODE => self.user_code = Some(value),
            REFACTOR_REQUEST => self.refactor_request = Some(value),
            _ => {}
        }
    }

    /// 空字串視同未提供
    fn into_request(self) -> Result<RefactorRequest, RelayError> {
        let user_code = self.user_code.filter(|v| !v.is_empty());
        let refactor_request = self.refactor_request.filter(|v| !v.is_empty());

        match (user_code, refactor_request) {
            (Some(user_code), Some(refactor_request)) => Ok(RefactorRequest {
                user_code,
                refactor_request,
            }),
            (user_code, refactor_request) => {
                let mut issues = Vec::new();
                if user_code.is_none() {
                    issues.push(FieldIssue::missing(USER_CODE));
                }
                if refactor_request.is_none() {
                    issues.push(FieldIssue::missing(REFACTOR_REQUEST));
                }
                Err(RelayError::ValidationError { issues })
            }
        }
    }
}

enum FormKind {
    UrlEncoded,
    Multipart,
    Other,
}

fn form_kind(headers: &HeaderMap) -> FormKind {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.to_ascii_lowercase())
        .unwrap_or_default();

    if content_type.starts_with("application/x-www-form-urlencoded") {
        FormKind::UrlEncoded
    } else if content_type.starts_with("multipart/form-data") {
        FormKind::Multipart
    } else {
        FormKind::Other
    }
}

fn malformed(status: StatusCode, message: String) -> RelayError {
    RelayError::MalformedBodyError {
        status: status.as_u16(),
        message,
    }
}

async fn read_multipart<S>(req: Request, state: &S) -> Result<RawRefactorForm, RelayError>
where
    S: Send + Sync,
{
    let mut multipart = Multipart::from_request(req, state)
        .await
        .map_err(|rejection| malformed(rejection.status(), rejection.body_text()))?;

    let mut raw = RawRefactorForm::default();
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| malformed(e.status(), e.body_text()))?
    {
        let Some(name) = field.name().map(str::to_string) else {
            continue;
        };
        let value = field
            .text()
            .await
            .map_err(|e| malformed(e.status(), e.body_text()))?;
        raw.set(&name, value);
    }
    Ok(raw)
}

impl<S> FromRequest<S> for RefactorForm
where
    S: Send + Sync,
{
    type Rejection = RelayError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let raw = match form_kind(req.headers()) {
            FormKind::UrlEncoded => {
                let Form(pairs) = Form::<Vec<(String, String)>>::from_request(req, state)
                    .await
                    .map_err(|rejection| malformed(rejection.status(), rejection.body_text()))?;
                let mut raw = RawRefactorForm::default();
                for (name, value) in pairs {
                    raw.set(&name, value);
                }
                raw
            }
            FormKind::Multipart => read_multipart(req, state).await?,
            // 非表單內容等同兩個欄位都缺少
            FormKind::Other => RawRefactorForm::default(),
        };

        raw.into_request().map(RefactorForm)
    }
}
