use yew::prelude::*;

const ABOUT_ROWS: &[(&str, &str)] = &[
    ("Application", "Slot Machine"),
    ("Platforms", "Web, Terminal"),
    ("Version", env!("CARGO_PKG_VERSION")),
    ("License", env!("CARGO_PKG_LICENSE")),
];

#[derive(Properties, PartialEq)]
pub(crate) struct InfoProps {
    pub on_close: Callback<MouseEvent>,
}

/// About sheet. Background music plays while it's open, see `Msg::ToggleInfo`.
#[function_component]
pub(crate) fn InfoView(props: &InfoProps) -> Html {
    html! {
        <dialog id="info" open={true}>
            <article>
                <header>
                    <img class="logo" src="images/gfx-slot-machine.svg" alt="Slot Machine"/>
                    <button class="close" title="Close" onclick={props.on_close.clone()}>{"✕"}</button>
                </header>
                <h2>{"About the application"}</h2>
                <table>
                    {
                        for ABOUT_ROWS.iter().map(|(name, value)| html! {
                            <tr><td class="muted">{*name}</td><td>{*value}</td></tr>
                        })
                    }
                </table>
            </article>
        </dialog>
    }
}
