// ============================================================================
// ROOMS VIEW - Loading / Error / table with add, edit and column filters
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;
use crate::dom::{append_child, field_value_by_id, on_change, on_click, ElementBuilder};
use crate::models::room::usage_label;
use crate::models::{Room, RoomDraft};
use crate::state::{RoomFilter, RoomListState, RoomPageState, RowMode, UsageFilter};
use crate::viewmodels::RoomViewModel;

const NEW_NAME_ID: &str = "new-room-name";
const NEW_USED_ID: &str = "new-room-used";
const EDIT_NAME_ID: &str = "edit-room-name";
const EDIT_USED_ID: &str = "edit-room-used";

pub fn render_rooms(state: &RoomPageState, vm: &RoomViewModel) -> Result<Element, JsValue> {
    match &state.list {
        RoomListState::Loading => Ok(ElementBuilder::new("div")?
            .class("text-center mt-5")
            .child(ElementBuilder::new("div")?.class("spinner-grow text-info").attr("role", "status")?.build())?
            .build()),
        RoomListState::Error(message) => Ok(ElementBuilder::new("div")?
            .class("text-center mt-5")
            .child(ElementBuilder::new("p")?.text("Try Again").build())?
            .child(ElementBuilder::new("p")?.text(message).build())?
            .build()),
        RoomListState::Ready(rooms) => render_table(state, rooms, vm),
    }
}

fn render_table(state: &RoomPageState, rooms: &[Room], vm: &RoomViewModel) -> Result<Element, JsValue> {
    let container = ElementBuilder::new("div")?.class("container mt-4 rooms-page").build();

    let toolbar = ElementBuilder::new("div")?
        .class("table-toolbar")
        .child(ElementBuilder::new("h2")?.text("rooms").build())?
        .build();
    let add_btn = ElementBuilder::new("button")?
        .class("btn btn-outline-primary")
        .attr("type", "button")?
        .text("+ Add")
        .flag("disabled", state.saving || state.row_mode != RowMode::Idle)?
        .build();
    {
        let vm = vm.clone();
        on_click(&add_btn, move |_| vm.begin_add());
    }
    append_child(&toolbar, &add_btn)?;
    append_child(&container, &toolbar)?;

    if let Some(message) = &state.mutation_error {
        append_child(&container, &render_inline_error(message, vm)?)?;
    }

    let table = ElementBuilder::new("table")?.class("table table-striped").build();
    let head = ElementBuilder::new("thead")?
        .child(
            ElementBuilder::new("tr")?
                .child(ElementBuilder::new("th")?.text("name").build())?
                .child(ElementBuilder::new("th")?.text("isUsed").build())?
                .child(ElementBuilder::new("th")?.text("").build())?
                .build(),
        )?
        .child(render_filter_row(&state.filter, vm)?)?
        .build();
    append_child(&table, &head)?;

    let body = ElementBuilder::new("tbody")?.build();
    if state.row_mode == RowMode::Adding {
        append_child(&body, &render_add_row(state.saving, vm)?)?;
    }
    let visible = state.filter.apply(rooms);
    if visible.is_empty() {
        let empty = ElementBuilder::new("tr")?
            .child(ElementBuilder::new("td")?.attr("colspan", "3")?.text("No records to display").build())?
            .build();
        append_child(&body, &empty)?;
    }
    for room in visible {
        let editing = matches!(&state.row_mode, RowMode::Editing(id) if room.id.as_ref() == Some(id));
        let row = if editing {
            render_edit_row(room, state.saving, vm)?
        } else {
            render_row(room, state, vm)?
        };
        append_child(&body, &row)?;
    }
    append_child(&table, &body)?;
    append_child(&container, &table)?;

    Ok(container)
}

fn render_filter_row(filter: &RoomFilter, vm: &RoomViewModel) -> Result<Element, JsValue> {
    let name_input = ElementBuilder::new("input")?
        .class("form-control form-control-sm")
        .attr("type", "text")?
        .attr("placeholder", "Filter")?
        .attr("value", &filter.name)?
        .build();
    {
        let vm = vm.clone();
        let usage = filter.usage;
        on_change(&name_input, move |name| vm.set_filter(RoomFilter { name, usage }));
    }

    let usage_select = usage_select(None, filter.usage)?;
    {
        let vm = vm.clone();
        let name = filter.name.clone();
        on_change(&usage_select, move |value| {
            vm.set_filter(RoomFilter {
                name: name.clone(),
                usage: UsageFilter::from_value(&value),
            })
        });
    }

    Ok(ElementBuilder::new("tr")?
        .class("filter-row")
        .child(ElementBuilder::new("th")?.child(name_input)?.build())?
        .child(ElementBuilder::new("th")?.child(usage_select)?.build())?
        .child(ElementBuilder::new("th")?.build())?
        .build())
}

/// `<select>` over the usage lookup; the filter variant adds an "any" entry
fn usage_select(id: Option<&str>, selected: UsageFilter) -> Result<Element, JsValue> {
    let mut builder = ElementBuilder::new("select")?.class("form-control form-control-sm");
    if let Some(id) = id {
        builder = builder.id(id)?;
    } else {
        builder = builder.child(option("", "", selected == UsageFilter::Any)?)?;
    }
    builder
        .child(option("true", usage_label(true), selected == UsageFilter::Used)?)?
        .child(option("false", usage_label(false), selected == UsageFilter::Unused)?)
        .map(ElementBuilder::build)
}

fn option(value: &str, label: &str, selected: bool) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("option")?
        .attr("value", value)?
        .text(label)
        .flag("selected", selected)?
        .build())
}

fn usage_of(is_used: bool) -> UsageFilter {
    if is_used {
        UsageFilter::Used
    } else {
        UsageFilter::Unused
    }
}

fn render_row(room: &Room, state: &RoomPageState, vm: &RoomViewModel) -> Result<Element, JsValue> {
    let edit_btn = ElementBuilder::new("button")?
        .class("btn btn-sm btn-link")
        .attr("type", "button")?
        .text("Edit")
        .flag("disabled", room.id.is_none() || state.saving || state.row_mode != RowMode::Idle)?
        .build();
    if let Some(id) = room.id.clone() {
        let vm = vm.clone();
        on_click(&edit_btn, move |_| vm.begin_edit(id.clone()));
    }

    Ok(ElementBuilder::new("tr")?
        .child(ElementBuilder::new("td")?.text(&room.name).build())?
        .child(ElementBuilder::new("td")?.text(room.usage_label()).build())?
        .child(ElementBuilder::new("td")?.child(edit_btn)?.build())?
        .build())
}

fn render_add_row(saving: bool, vm: &RoomViewModel) -> Result<Element, JsValue> {
    let name_input = ElementBuilder::new("input")?
        .class("form-control form-control-sm")
        .id(NEW_NAME_ID)?
        .attr("type", "text")?
        .attr("placeholder", "name")?
        .build();
    let save = action_button("Save", saving)?;
    {
        let vm = vm.clone();
        on_click(&save, move |_| {
            let draft = RoomDraft::new(field_value_by_id(NEW_NAME_ID), field_value_by_id(NEW_USED_ID) == "true");
            let vm = vm.clone();
            spawn_local(async move {
                // Failures end up in state.mutation_error
                let _ = vm.create_room(draft).await;
            });
        });
    }
    let cancel = cancel_button(saving, vm)?;

    Ok(ElementBuilder::new("tr")?
        .class("editing-row")
        .child(ElementBuilder::new("td")?.child(name_input)?.build())?
        .child(ElementBuilder::new("td")?.child(usage_select(Some(NEW_USED_ID), UsageFilter::Unused)?)?.build())?
        .child(ElementBuilder::new("td")?.child(save)?.child(cancel)?.build())?
        .build())
}

fn render_edit_row(room: &Room, saving: bool, vm: &RoomViewModel) -> Result<Element, JsValue> {
    let name_input = ElementBuilder::new("input")?
        .class("form-control form-control-sm")
        .id(EDIT_NAME_ID)?
        .attr("type", "text")?
        .attr("value", &room.name)?
        .build();
    let save = action_button("Save", saving)?;
    {
        let vm = vm.clone();
        let old = room.clone();
        on_click(&save, move |_| {
            let new_data = Room {
                id: old.id.clone(),
                name: field_value_by_id(EDIT_NAME_ID),
                is_used: field_value_by_id(EDIT_USED_ID) == "true",
            };
            let (vm, old) = (vm.clone(), old.clone());
            spawn_local(async move {
                let _ = vm.update_room(new_data, &old).await;
            });
        });
    }
    let cancel = cancel_button(saving, vm)?;

    Ok(ElementBuilder::new("tr")?
        .class("editing-row")
        .child(ElementBuilder::new("td")?.child(name_input)?.build())?
        .child(ElementBuilder::new("td")?.child(usage_select(Some(EDIT_USED_ID), usage_of(room.is_used))?)?.build())?
        .child(ElementBuilder::new("td")?.child(save)?.child(cancel)?.build())?
        .build())
}

fn action_button(label: &str, saving: bool) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("button")?
        .class("btn btn-sm btn-primary")
        .attr("type", "button")?
        .text(if saving { "Saving..." } else { label })
        .flag("disabled", saving)?
        .build())
}

fn cancel_button(saving: bool, vm: &RoomViewModel) -> Result<Element, JsValue> {
    let cancel = ElementBuilder::new("button")?
        .class("btn btn-sm btn-link")
        .attr("type", "button")?
        .text("Cancel")
        .flag("disabled", saving)?
        .build();
    let vm = vm.clone();
    on_click(&cancel, move |_| vm.cancel_edit());
    Ok(cancel)
}

fn render_inline_error(message: &str, vm: &RoomViewModel) -> Result<Element, JsValue> {
    let close = ElementBuilder::new("button")?
        .class("close")
        .attr("type", "button")?
        .text("×")
        .build();
    let vm = vm.clone();
    on_click(&close, move |_| vm.dismiss_error());

    Ok(ElementBuilder::new("div")?
        .class("alert alert-danger")
        .attr("role", "alert")?
        .child(ElementBuilder::new("span")?.text(message).build())?
        .child(close)?
        .build())
}
