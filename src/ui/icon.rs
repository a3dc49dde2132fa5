use leptos::prelude::*;

#[component]
pub fn Icon(
    /// Icon name (without the .svg extension)
    name: &'static str,
    /// CSS classes for sizing/coloring
    #[prop(default = "w-5 h-5")]
    class: &'static str,
) -> impl IntoView {
    let icon_path = format!("/icons/{}.svg", name);

    view! {
        <img
            src=icon_path
            class=class
            alt=name
            draggable=false
        />
    }
}

/// Named icons shipped under /public/icons
#[allow(dead_code)]
pub mod icons {
    pub const GAVEL: &str = "gavel";
    pub const CHECK: &str = "check";
    pub const X: &str = "x";
    pub const ALERT_CIRCLE: &str = "alert-circle";
    pub const LOADER: &str = "loader";
    pub const USER: &str = "user";
    pub const LOGOUT: &str = "logout";
}
