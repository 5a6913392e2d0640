//! Interactive tutorial overlay: renders the current step's text and the
//! back/next/exit controls, re-rendering on every controller notification.
use crate::dom;
use crate::game::TutorialHandle;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct TutorialOverlayProps {
    pub tutorial: TutorialHandle,
}

#[function_component(TutorialOverlay)]
pub fn tutorial_overlay(props: &TutorialOverlayProps) -> Html {
    let update = use_force_update();

    // Other parts of the system drive the tutorial too (gated steps unlock
    // when the requested action happens elsewhere), so re-render on every
    // controller notification. The subscription is dropped by the effect
    // cleanup when the overlay unmounts.
    {
        let tutorial = props.tutorial.clone();
        use_effect_with(tutorial, move |tutorial| {
            let subscription = tutorial.subscribe(move || update.force_update());
            move || drop(subscription)
        });
    }

    let tutorial = &props.tutorial;
    if !tutorial.is_running() {
        return Html::default();
    }

    let content = match tutorial.current_content() {
        Ok(content) => content,
        Err(err) => {
            // Registry hole at the live step: unrecoverable. Say so loudly
            // instead of skipping ahead.
            dom::console_error(&format!("Tutorial is unrenderable: {err}"));
            return html! {
                <section class="panel tutorial-overlay tutorial-error" role="alert">
                    <p>{ format!("Tutorial configuration error: {err}") }</p>
                </section>
            };
        }
    };

    let on_prev = {
        let tutorial = tutorial.clone();
        Callback::from(move |_| tutorial.prev())
    };
    let on_next = {
        let tutorial = tutorial.clone();
        Callback::from(move |_| {
            if let Err(err) = tutorial.next() {
                dom::console_error(&format!("Tutorial is unrenderable: {err}"));
            }
        })
    };
    let on_exit = {
        let tutorial = tutorial.clone();
        Callback::from(move |_| tutorial.end())
    };

    html! {
        <section class="panel tutorial-overlay" role="dialog"
                 aria-label="Interactive tutorial" data-testid="tutorial-overlay">
            <p class="tutorial-text">{ &content.text }</p>
            <div class="controls">
                <button class="retro-btn-secondary" aria-label="Previous step" onclick={on_prev}>
                    { "Back" }
                </button>
                if content.can_advance {
                    <button class="retro-btn" aria-label="Next step" onclick={on_next}
                            data-testid="tutorial-next">
                        { "Next" }
                    </button>
                }
            </div>
            <button class="retro-btn-secondary tutorial-exit" onclick={on_exit}>
                { "EXIT" }
            </button>
        </section>
    }
}
