// pages/src/modal.rs
//
// One modal per page instance, one state at a time. The draft lives inside
// the Adding/Editing states so closing the modal necessarily drops it; the
// error map rides along and is replaced wholesale by server validation.

use models::{Draft, FieldErrors, Keyed};

#[derive(Clone, Debug, PartialEq)]
pub enum ModalState<T, D> {
    Closed,
    Adding { draft: D, errors: FieldErrors },
    Editing { id: i32, draft: D, errors: FieldErrors },
    Viewing { target: T },
    ConfirmingDelete { target: T },
}

pub struct ModalLifecycle<T, D> {
    state: ModalState<T, D>,
}

impl<T: Keyed + Clone, D: Draft<Entity = T>> ModalLifecycle<T, D> {
    pub fn new() -> Self {
        ModalLifecycle {
            state: ModalState::Closed,
        }
    }

    pub fn state(&self) -> &ModalState<T, D> {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        !matches!(self.state, ModalState::Closed)
    }

    /// Opens the add form with a default-shaped draft and no errors.
    /// Replaces whatever modal was open before.
    pub fn open_add(&mut self) {
        self.state = ModalState::Adding {
            draft: D::default(),
            errors: FieldErrors::new(),
        };
    }

    /// Opens the edit form with a draft copied from the entity; the entity
    /// itself is never aliased by the form.
    pub fn open_edit(&mut self, entity: &T) {
        self.state = ModalState::Editing {
            id: entity.key(),
            draft: D::from_entity(entity),
            errors: FieldErrors::new(),
        };
    }

    pub fn open_view(&mut self, entity: T) {
        self.state = ModalState::Viewing { target: entity };
    }

    pub fn open_delete(&mut self, entity: T) {
        self.state = ModalState::ConfirmingDelete { target: entity };
    }

    /// Cancel and close are the same transition: back to `Closed`, dropping
    /// the draft and its errors.
    pub fn cancel(&mut self) {
        self.state = ModalState::Closed;
    }

    pub fn close(&mut self) {
        self.state = ModalState::Closed;
    }

    /// Mutable access to the open form's draft, if any.
    pub fn draft_mut(&mut self) -> Option<&mut D> {
        match &mut self.state {
            ModalState::Adding { draft, .. } | ModalState::Editing { draft, .. } => Some(draft),
            _ => None,
        }
    }

    pub fn errors(&self) -> Option<&FieldErrors> {
        match &self.state {
            ModalState::Adding { errors, .. } | ModalState::Editing { errors, .. } => Some(errors),
            _ => None,
        }
    }

    /// Attaches server-side validation to the open form without closing it
    /// or touching the draft. No-op when no form is open.
    pub fn set_errors(&mut self, new_errors: FieldErrors) {
        match &mut self.state {
            ModalState::Adding { errors, .. } | ModalState::Editing { errors, .. } => {
                *errors = new_errors;
            }
            _ => {}
        }
    }

    /// What a submit would do: `(None, draft)` for create,
    /// `(Some(id), draft)` for update. The draft is cloned so the caller
    /// can await without borrowing the modal.
    pub fn submit_target(&self) -> Option<(Option<i32>, D)> {
        match &self.state {
            ModalState::Adding { draft, .. } => Some((None, draft.clone())),
            ModalState::Editing { id, draft, .. } => Some((Some(*id), draft.clone())),
            _ => None,
        }
    }

    pub fn delete_target(&self) -> Option<i32> {
        match &self.state {
            ModalState::ConfirmingDelete { target } => Some(target.key()),
            _ => None,
        }
    }
}

impl<T: Keyed + Clone, D: Draft<Entity = T>> Default for ModalLifecycle<T, D> {
    fn default() -> Self {
        ModalLifecycle::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use models::medical::{Room, RoomDraft, RoomStatus, RoomType};

    fn room() -> Room {
        Room {
            id: 5,
            name: "Exam 2".into(),
            room_type: RoomType::Examination,
            capacity: 2,
            status: RoomStatus::Available,
            equipment: vec!["scale".into()],
        }
    }

    #[test]
    fn add_then_cancel_resets_to_default_shape() {
        let mut modal: ModalLifecycle<Room, RoomDraft> = ModalLifecycle::new();
        modal.open_add();
        modal.draft_mut().unwrap().name = "half-typed".into();
        modal.cancel();
        assert!(!modal.is_open());
        modal.open_add();
        assert_eq!(
            modal.submit_target().unwrap().1,
            RoomDraft::default(),
            "reopening add must start from the default draft"
        );
        assert!(modal.errors().unwrap().is_empty());
    }

    #[test]
    fn edit_draft_does_not_alias_the_entity() {
        let original = room();
        let mut modal: ModalLifecycle<Room, RoomDraft> = ModalLifecycle::new();
        modal.open_edit(&original);
        modal.draft_mut().unwrap().name = "Renamed".into();
        modal.cancel();
        assert_eq!(original.name, "Exam 2");
    }

    #[test]
    fn server_errors_keep_the_form_open_and_the_draft_intact() {
        let mut modal: ModalLifecycle<Room, RoomDraft> = ModalLifecycle::new();
        modal.open_edit(&room());
        let mut errors = FieldErrors::new();
        errors.insert("name".into(), "already taken".into());
        modal.set_errors(errors);
        assert!(modal.is_open());
        let (target, draft) = modal.submit_target().unwrap();
        assert_eq!(target, Some(5));
        assert_eq!(draft.name, "Exam 2");
        assert_eq!(
            modal.errors().unwrap().get("name").map(String::as_str),
            Some("already taken")
        );
    }

    #[test]
    fn only_one_modal_at_a_time() {
        let mut modal: ModalLifecycle<Room, RoomDraft> = ModalLifecycle::new();
        modal.open_view(room());
        modal.open_add();
        assert!(matches!(modal.state(), ModalState::Adding { .. }));
        modal.open_delete(room());
        assert_eq!(modal.delete_target(), Some(5));
        assert!(modal.submit_target().is_none());
    }
}
