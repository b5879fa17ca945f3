use dasharrow::{ClickBinder, Error, PageConfig, TextRenderer};
use gloo_console::error;
use web_sys::{wasm_bindgen::throw_str, Element, MouseEvent};
use yew::prelude::*;

#[derive(Properties, PartialEq, Default)]
pub struct ArrowCounterProps {
    #[prop_or_default]
    pub config: PageConfig,
}

fn fail(err: Error) -> ! {
    error!(err.to_string());
    throw_str(&err.to_string())
}

/// Yew lays out the button and paragraph once. After that the paragraph is
/// written only by the binder, never re-rendered by yew.
#[function_component]
pub fn ArrowCounter(props: &ArrowCounterProps) -> Html {
    let text_ref = use_node_ref();
    let binder = use_mut_ref(|| None::<ClickBinder<Element>>);

    {
        let text_ref = text_ref.clone();
        let binder = binder.clone();
        let text_id = props.config.text_id.clone();
        use_effect_with((), move |_| {
            let bound = text_ref
                .cast::<Element>()
                .ok_or_else(|| Error::MissingElement(text_id.clone()))
                .and_then(|text| ClickBinder::bind(TextRenderer::new(&text_id, text)));
            match bound {
                Ok(bound) => *binder.borrow_mut() = Some(bound),
                Err(err) => fail(err),
            }
        });
    }

    let onclick = {
        let binder = binder.clone();
        let text_id = props.config.text_id.clone();
        Callback::from(move |_: MouseEvent| {
            let result = match binder.borrow_mut().as_mut() {
                Some(binder) => binder.click(),
                None => Err(Error::MissingTextNode(text_id.clone())),
            };
            if let Err(err) = result {
                fail(err);
            }
        })
    };

    let config = &props.config;
    html! {
        <div id={config.container_id.clone()}>
            <button id={config.button_id.clone()} type="button" {onclick}>{config.button_label.clone()}</button>
            <p id={config.text_id.clone()} ref={text_ref}></p>
        </div>
    }
}
