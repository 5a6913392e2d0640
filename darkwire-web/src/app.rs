//! Application shell: owns settings, the implant collection, and the
//! tutorial handle, and wires the panels together.
use crate::a11y;
use crate::components::ui::installed_implants::InstalledImplants;
use crate::components::ui::tutorial_overlay::TutorialOverlay;
use crate::dom;
use crate::game::{
    self, ImplantSortOrder, Settings, SettingsStore, WebSettingsStore,
};
use yew::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    let settings = use_state(|| {
        game::load_settings(&WebSettingsStore).unwrap_or_else(|err| {
            log::warn!("falling back to default settings: {err}");
            Settings::default()
        })
    });
    let implants = use_memo((), |()| game::implant_catalog().listed());
    let tutorial = use_state(|| match game::load_tutorial() {
        Ok(handle) => Some(handle),
        Err(err) => {
            dom::console_error(&format!("Tutorial disabled: {err:#}"));
            None
        }
    });

    {
        let accent = settings.theme_accent.clone();
        use_effect_with(accent, |accent| {
            a11y::apply_theme_accent(accent);
        });
    }

    // Changing the sort preference is a global side effect: it goes through
    // the settings store, not just this render's state.
    let on_sort_change = {
        let settings = settings.clone();
        Callback::from(move |order: ImplantSortOrder| {
            let mut next = (*settings).clone();
            next.implant_sort_order = order;
            if let Err(err) = WebSettingsStore.save(&next) {
                dom::console_error(&format!("Failed to persist settings: {err}"));
            }
            settings.set(next);
        })
    };

    let restart_tutorial = {
        let tutorial = tutorial.clone();
        Callback::from(move |_| {
            if let Some(handle) = tutorial.as_ref() {
                handle.restart();
            }
        })
    };

    let tutorial_view = match tutorial.as_ref() {
        Some(handle) => html! { <TutorialOverlay tutorial={handle.clone()} /> },
        None => html! {
            <section class="panel tutorial-error" role="alert">
                <p>{ "The tutorial cannot run: its step content is broken. See the console." }</p>
            </section>
        },
    };

    html! {
        <div class="app" data-testid="app-root">
            <header class="app-header">
                <h1>{ "Darkwire" }</h1>
                <button class="retro-btn-secondary" onclick={restart_tutorial}>
                    { "Restart tutorial" }
                </button>
            </header>
            <p id="panel-helper" aria-live="polite" class="sr-only"></p>
            <main>
                <InstalledImplants
                    implants={implants.clone()}
                    sort_order={settings.implant_sort_order}
                    on_sort_change={on_sort_change}
                />
                { tutorial_view }
            </main>
        </div>
    }
}
