// console/src/cli/handlers_rooms.rs
//
// Rooms are the one resource the data service never persisted, so the
// console seeds them from the local fixtures and runs the same list/modal
// machinery against that seed. Mutations validate and report, but only
// live for the length of the command.

use std::sync::Arc;

use anyhow::{bail, Result};
use log::info;

use gateway::ApiTransport;
use models::medical::{Room, RoomDraft};
use models::{Draft, Keyed};
use pages::resources::RoomFilters;
use pages::{fixtures, ListController, ModalLifecycle, ToastSender};

use crate::cli::cli::{RoomAction, RoomForm, RoomListArgs};
use crate::cli::handlers_utils as utils;

pub async fn handle(
    action: RoomAction,
    _transport: Arc<dyn ApiTransport>,
    toasts: &ToastSender,
) -> Result<()> {
    let mut list: ListController<Room, RoomFilters> = ListController::new();
    list.replace_items(fixtures::rooms());

    match action {
        RoomAction::List(args) => print_list(&mut list, args),
        RoomAction::Add(form) => {
            let mut modal: ModalLifecycle<Room, RoomDraft> = ModalLifecycle::new();
            modal.open_add();
            submit(&mut modal, &mut list, form, toasts)
        }
        RoomAction::Update { id, form } => {
            let Some(existing) = list.items().iter().find(|r| r.id == id).cloned() else {
                bail!("no room with id {id}");
            };
            let mut modal: ModalLifecycle<Room, RoomDraft> = ModalLifecycle::new();
            modal.open_edit(&existing);
            submit(&mut modal, &mut list, form, toasts)
        }
        RoomAction::Delete { id } => {
            let Some(target) = list.items().iter().find(|r| r.id == id).cloned() else {
                bail!("no room with id {id}");
            };
            let mut modal: ModalLifecycle<Room, RoomDraft> = ModalLifecycle::new();
            modal.open_delete(target);
            if let Some(id) = modal.delete_target() {
                let remaining: Vec<Room> =
                    list.items().iter().filter(|r| r.id != id).cloned().collect();
                list.replace_items(remaining);
                modal.close();
                toasts.success("Deleted rooms");
                info!("room {id} removed from the session seed");
            }
            Ok(())
        }
    }
}

fn print_list(list: &mut ListController<Room, RoomFilters>, args: RoomListArgs) -> Result<()> {
    if let Some(raw) = &args.room_type {
        list.filters.room_type = Some(utils::parse_room_type(raw)?);
    }
    if let Some(raw) = &args.status {
        list.filters.status = Some(utils::parse_room_status(raw)?);
    }
    if let Some(term) = args.search {
        list.set_search_term(term);
    }

    let visible = list.visible_items();
    println!(
        "{}",
        utils::count_line("rooms", visible.len(), list.len(), list.is_filtered())
    );
    for room in visible {
        println!(
            "{:>4}  {:<16} {}  {}  cap {}  [{}]",
            room.id,
            room.name,
            utils::badge_cell(&room.room_type),
            utils::badge_cell(&room.status),
            room.capacity,
            room.equipment.join(", "),
        );
    }
    Ok(())
}

fn submit(
    modal: &mut ModalLifecycle<Room, RoomDraft>,
    list: &mut ListController<Room, RoomFilters>,
    form: RoomForm,
    toasts: &ToastSender,
) -> Result<()> {
    {
        let Some(draft) = modal.draft_mut() else {
            bail!("no open form to fill");
        };
        apply_form(draft, form)?;
    }

    let Some((target, draft)) = modal.submit_target() else {
        return Ok(());
    };
    match draft.validate() {
        Ok(mut room) => {
            let mut items = list.items().to_vec();
            match target {
                Some(id) => {
                    room.id = id;
                    if let Some(slot) = items.iter_mut().find(|r| r.key() == id) {
                        *slot = room.clone();
                    }
                }
                None => {
                    room.id = items.iter().map(|r| r.id).max().unwrap_or(0) + 1;
                    items.push(room.clone());
                }
            }
            list.replace_items(items);
            modal.close();
            toasts.success("Saved rooms");
            toasts.info("Rooms are session-local; the data service does not store them");
            println!("{}  {}", room.id, room.name);
        }
        Err(errors) => {
            modal.set_errors(errors);
            println!("not saved:");
            if let Some(errors) = modal.errors() {
                utils::print_errors(errors);
            }
        }
    }
    Ok(())
}

fn apply_form(draft: &mut RoomDraft, form: RoomForm) -> Result<()> {
    utils::apply(&mut draft.name, form.name);
    utils::apply(&mut draft.capacity, form.capacity);
    utils::apply(&mut draft.equipment, form.equipment);
    if let Some(raw) = form.room_type {
        draft.room_type = Some(utils::parse_room_type(&raw)?);
    }
    if let Some(raw) = form.status {
        draft.status = Some(utils::parse_room_status(&raw)?);
    }
    Ok(())
}
