//! Screen Actions
//!
//! Async calls against the food service, with their dialogs and logging.
//! State changes are left to the caller so they can be applied to the store.

use crate::api::{ApiError, FoodApi};
use crate::dialog::{Alert, ConfirmPrompt, Dialogs};
use crate::editor::{SaveRefused, SaveRequest};
use crate::models::{FoodId, FoodItem};
use crate::validation::ValidationError;

const SAVE_REJECTED: &str = "Hubo un error al guardar la comida";
const REQUEST_FAILED: &str = "Hubo un error en la solicitud";
const DELETE_FAILED: &str = "Hubo un error al eliminar la comida";

/// Fetch the full list. Failures are only logged.
pub async fn fetch_all(api: &dyn FoodApi) -> Option<Vec<FoodItem>> {
    match api.list().await {
        Ok(items) => {
            log::info!("[actions] loaded {} foods", items.len());
            Some(items)
        }
        Err(e) => {
            log::error!("[actions] loading foods failed: {}", e);
            None
        }
    }
}

/// Send one POST or PUT for `request`. Returns the server's record on success.
pub async fn save(
    api: &dyn FoodApi,
    dialogs: &dyn Dialogs,
    request: &SaveRequest,
) -> Option<FoodItem> {
    let result = match request {
        SaveRequest::Create(draft) => api.create(draft).await,
        SaveRequest::Update(id, draft) => api.update(*id, draft).await,
    };

    match (result, request) {
        (Ok(item), SaveRequest::Create(_)) => {
            log::info!("[actions] created food {}", item.id);
            dialogs.alert(Alert::success("Agregado", "La comida fue agregada con éxito"));
            Some(item)
        }
        (Ok(item), SaveRequest::Update(..)) => {
            log::info!("[actions] updated food {}", item.id);
            dialogs.alert(Alert::success("Actualizado", "La comida fue actualizada con éxito"));
            Some(item)
        }
        (Err(e), _) => {
            log::error!("[actions] saving food failed: {}", e);
            dialogs.alert(Alert::error(save_failure_message(&e)));
            None
        }
    }
}

fn save_failure_message(error: &ApiError) -> &'static str {
    if error.is_status() {
        SAVE_REJECTED
    } else {
        REQUEST_FAILED
    }
}

/// Ask for confirmation, then delete. Returns true once the server removed the record.
pub async fn delete(api: &dyn FoodApi, dialogs: &dyn Dialogs, id: FoodId) -> bool {
    if !dialogs.confirm(ConfirmPrompt::delete_food()).await {
        log::debug!("[actions] delete of food {} cancelled", id);
        return false;
    }

    match api.delete(id).await {
        Ok(()) => {
            log::info!("[actions] deleted food {}", id);
            dialogs.alert(Alert::success("Eliminado", "La comida fue eliminada con éxito"));
            true
        }
        Err(e) => {
            log::error!("[actions] deleting food {} failed: {}", id, e);
            dialogs.alert(Alert::error(DELETE_FAILED));
            false
        }
    }
}

/// Report a rejected keystroke.
pub fn reject_input(dialogs: &dyn Dialogs, error: &ValidationError) {
    log::debug!("[actions] input rejected: {}", error);
    dialogs.alert(Alert::error(error.user_message()));
}

/// Report a save that was not started.
pub fn refuse_save(dialogs: &dyn Dialogs, refused: &SaveRefused) {
    match refused {
        SaveRefused::Invalid(error) => reject_input(dialogs, error),
        SaveRefused::InFlight | SaveRefused::Closed => {
            log::debug!("[actions] save ignored: {}", refused);
        }
    }
}
