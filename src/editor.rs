//! Modal Form State
//!
//! One form shared by create and edit. Lifecycle: `closed -> open(create|edit) -> closed`.

use thiserror::Error;

use crate::models::{FoodDraft, FoodId, FoodItem};
use crate::validation::{self, Field, ValidationError};

/// Which record the open form targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorMode {
    Create,
    Edit(FoodId),
}

/// The request a save turns into
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveRequest {
    Create(FoodDraft),
    Update(FoodId, FoodDraft),
}

/// A started save. `token` must be handed back to [`Editor::finish_save`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveTicket {
    pub token: u64,
    pub request: SaveRequest,
}

/// Why a save was not started
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SaveRefused {
    #[error("the form is closed")]
    Closed,
    #[error("a save is already in flight")]
    InFlight,
    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

/// A save the service has not answered yet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct InFlight {
    token: u64,
    /// The open/close cycle that started it
    session: u64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Editor {
    mode: Option<EditorMode>,
    form: FoodDraft,
    session: u64,
    /// Survives close and reopen; only the matching `finish_save` clears it.
    in_flight: Option<InFlight>,
    next_token: u64,
}

impl Editor {
    pub fn is_open(&self) -> bool {
        self.mode.is_some()
    }

    pub fn mode(&self) -> Option<EditorMode> {
        self.mode
    }

    pub fn form(&self) -> &FoodDraft {
        &self.form
    }

    pub fn is_saving(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Modal title for the current mode
    pub fn title(&self) -> &'static str {
        match self.mode {
            Some(EditorMode::Edit(_)) => "Editar Comida",
            _ => "Agregar Comida",
        }
    }

    /// Open with an empty form
    pub fn open_create(&mut self) {
        self.session += 1;
        self.mode = Some(EditorMode::Create);
        self.form = FoodDraft::default();
    }

    /// Open pre-filled from `item`
    pub fn open_edit(&mut self, item: &FoodItem) {
        self.session += 1;
        self.mode = Some(EditorMode::Edit(item.id));
        self.form = item.draft();
    }

    /// Close and forget the form and edit target
    pub fn close(&mut self) {
        self.mode = None;
        self.form = FoodDraft::default();
    }

    /// Apply one keystroke. A rejected value leaves the field unchanged.
    pub fn set_field(&mut self, field: Field, value: String) -> Result<(), ValidationError> {
        validation::check_field(field, &value)?;
        let slot = match field {
            Field::Name => &mut self.form.name,
            Field::Description => &mut self.form.description,
            Field::Price => &mut self.form.price,
            Field::Calories => &mut self.form.calories,
        };
        *slot = value;
        Ok(())
    }

    /// Validate the form and mark a save in flight.
    pub fn begin_save(&mut self) -> Result<SaveTicket, SaveRefused> {
        let mode = self.mode.ok_or(SaveRefused::Closed)?;
        if self.in_flight.is_some() {
            return Err(SaveRefused::InFlight);
        }
        validation::check_complete(&self.form)?;

        let token = self.next_token;
        self.next_token += 1;
        self.in_flight = Some(InFlight {
            token,
            session: self.session,
        });

        let draft = self.form.clone();
        let request = match mode {
            EditorMode::Create => SaveRequest::Create(draft),
            EditorMode::Edit(id) => SaveRequest::Update(id, draft),
        };
        Ok(SaveTicket { token, request })
    }

    /// Settle a save. Success closes the form it was started from; failure keeps it
    /// open with its values. A form reopened since the save started stays open.
    pub fn finish_save(&mut self, token: u64, succeeded: bool) {
        let started = match self.in_flight {
            Some(in_flight) if in_flight.token == token => in_flight,
            _ => return,
        };
        self.in_flight = None;
        if succeeded && started.session == self.session {
            self.close();
        }
    }
}
