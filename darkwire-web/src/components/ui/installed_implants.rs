//! Installed implants panel: search box, sort controls, and a two-pane
//! list/detail browser over the player's acquired implants.
use crate::a11y::set_status;
use crate::game::{Implant, ImplantSortOrder, resolve_selection, visible_implants};
use std::rc::Rc;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, Clone)]
pub struct InstalledImplantsProps {
    /// The player's implants in acquirement order, already provider-filtered.
    pub implants: Rc<Vec<Implant>>,
    pub sort_order: ImplantSortOrder,
    /// Fired when the player picks a sort order; the shell persists it into
    /// the settings store, which is what makes the change global.
    pub on_sort_change: Callback<ImplantSortOrder>,
}

impl PartialEq for InstalledImplantsProps {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.implants, &other.implants) && self.sort_order == other.sort_order
    }
}

#[function_component(InstalledImplants)]
pub fn installed_implants(props: &InstalledImplantsProps) -> Html {
    let filter_text = use_state(String::new);
    // Initial selection is the first implant of the unfiltered collection.
    let selected_id = use_state(|| props.implants.first().map(|implant| implant.id.clone()));

    let visible = visible_implants(&props.implants, &filter_text, props.sort_order);

    {
        let shown = visible.len();
        let total = props.implants.len();
        use_effect_with((shown, total), move |(shown, total)| {
            set_status(&format!("Showing {shown} of {total} implants"));
        });
    }

    // Selection survives filtering; it only falls back to the first implant
    // when its id is no longer in the source collection at all.
    let selected = resolve_selection(&props.implants, (*selected_id).as_deref());

    let on_filter_input = {
        let filter_text = filter_text.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                filter_text.set(input.value());
            }
        })
    };

    let sort_in_order = {
        let on_sort_change = props.on_sort_change.clone();
        Callback::from(move |_| on_sort_change.emit(ImplantSortOrder::Alphabetical))
    };
    let sort_by_acquired = {
        let on_sort_change = props.on_sort_change.clone();
        Callback::from(move |_| on_sort_change.emit(ImplantSortOrder::Acquisition))
    };

    let on_select = {
        let selected_id = selected_id.clone();
        Callback::from(move |id: String| selected_id.set(Some(id)))
    };

    // The title and sort controls stay up even with nothing installed; only
    // the browser pane swaps for the placeholder.
    let browser = if let Some(selected) = selected {
        let rows = visible
            .iter()
            .map(|implant| {
                let onclick = {
                    let on_select = on_select.clone();
                    let id = implant.id.clone();
                    Callback::from(move |_| on_select.emit(id.clone()))
                };
                let is_selected = implant.id == selected.id;
                html! {
                    <li role="listitem">
                        <button
                            class={classes!("implant-row", is_selected.then_some("is-selected"))}
                            aria-pressed={if is_selected { "true" } else { "false" }}
                            data-implant-id={implant.id.clone()}
                            {onclick}
                        >
                            { &implant.name }
                        </button>
                    </li>
                }
            })
            .collect::<Html>();

        html! {
            <div class="implants-browser">
                <div class="implants-list-pane">
                    <input
                        type="search"
                        class="implants-search"
                        aria-label="Filter implants"
                        placeholder="Search"
                        value={(*filter_text).clone()}
                        oninput={on_filter_input}
                        data-testid="implant-search"
                    />
                    <ul role="list" class="implants-list">
                        { rows }
                    </ul>
                </div>
                <div class="implants-detail" data-testid="implant-detail">
                    <h3>{ &selected.name }</h3>
                    <p class="implant-info">{ &selected.info }</p>
                    <p class="implant-stats">{ &selected.stats }</p>
                </div>
            </div>
        }
    } else {
        html! {
            <p class="muted" data-testid="implants-empty">{ "No implants have been installed yet" }</p>
        }
    };

    html! {
        <section class="panel implants-panel" aria-labelledby="implants-title" data-testid="implants-panel">
            <h2 id="implants-title">{ "Installed Implants" }</h2>
            <div class="implants-sort controls">
                <button class="retro-btn-secondary"
                        title="Sorts the implants alphabetically"
                        onclick={sort_in_order}>
                    { "Sort in order" }
                </button>
                <button class="retro-btn-secondary"
                        title="Sorts the implants by when you acquired them (the default)"
                        onclick={sort_by_acquired}>
                    { "Sort by time of acquirement" }
                </button>
            </div>
            { browser }
        </section>
    }
}
