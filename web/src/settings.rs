use crate::utils::*;
use serde::{Deserialize, Serialize};
use shape_memory_core::Level;
use yew::prelude::*;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub(crate) struct Settings {
    pub level: Level,
}

impl StorageKey for Settings {
    const KEY: &'static str = "shape-memory:settings";
}

#[derive(Properties, PartialEq)]
pub(crate) struct LevelSelectProps {
    pub level: Level,
    pub onselect: Callback<Level>,
}

#[function_component]
pub(crate) fn LevelSelect(props: &LevelSelectProps) -> Html {
    let onchange = {
        let onselect = props.onselect.clone();
        Callback::from(move |e: Event| {
            let Some(select) = e.target_dyn_into::<web_sys::HtmlSelectElement>() else {
                return;
            };
            match select.value().parse::<Level>() {
                Ok(level) => {
                    log::debug!("level selected: {}", level);
                    onselect.emit(level);
                }
                Err(err) => log::error!("bad level option {:?}: {}", select.value(), err),
            }
        })
    };

    html! {
        <div class="controls">
            <label for="level-select">{"Choose Level: "}</label>
            <select id="level-select" class="dropdown" {onchange}>
                {
                    for Level::ALL.into_iter().map(|level| html! {
                        <option value={level.name()} selected={level == props.level}>
                            {level.label()}
                        </option>
                    })
                }
            </select>
        </div>
    }
}
