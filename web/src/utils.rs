use yew::prelude::*;

/// Types persisted in `LocalStorage` under a fixed key.
pub(crate) trait StorageKey {
    const KEY: &'static str;
}

#[derive(Properties, PartialEq)]
pub(crate) struct OverlayProps {
    #[prop_or_default]
    pub children: Html,
}

/// Dims the machine and shows `children` above it, mounted on `<body>` so the blurred screen can't clip it.
#[function_component(Overlay)]
pub(crate) fn overlay(props: &OverlayProps) -> Html {
    let content = html! {
        <div class="overlay">{props.children.clone()}</div>
    };
    create_portal(content, gloo::utils::body().into())
}

/// Reel seed for sessions without `--seed`, drawn from two `Math.random` calls.
pub(crate) fn browser_seed() -> u64 {
    use js_sys::Math::random;

    let word = || (random() * f64::from(u32::MAX)) as u64;
    (word() << 32) | word()
}
