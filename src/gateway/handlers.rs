use crate::domain::model::RefactorResult;
use crate::gateway::form::RefactorForm;
use crate::gateway::AppState;
use crate::utils::error::RelayError;
use axum::extract::State;
use axum::Json;

pub async fn refactor(
    State(state): State<AppState>,
    RefactorForm(request): RefactorForm,
) -> Result<Json<RefactorResult>, RelayError> {
    tracing::debug!(
        "Handling refactor request in {} mode ({} chars of code)",
        state.service.mode(),
        request.user_code.chars().count()
    );

    let result = state.service.refactor(&request).await?;
    Ok(Json(result))
}
