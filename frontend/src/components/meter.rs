//! Circular progress meter around the logo.

use dropzone::meter::{self, CENTER, DASH_ARRAY, RADIUS, VIEW_SIZE};
use dropzone::WidgetView;
use leptos::*;

use super::style::colors;
use super::PlaceholderIcon;

#[component]
pub fn ProgressRing(widget: Signal<WidgetView>) -> impl IntoView {
    let status_style = move || {
        widget.with(|v| {
            let stroke = if v.state.is_pending() {
                colors::BORDER1
            } else {
                colors::BG1
            };
            format!(
                "stroke-dasharray: {}; stroke-dashoffset: {}; stroke: {};",
                DASH_ARRAY,
                meter::state_offset(&v.state),
                stroke
            )
        })
    };

    let icon = move || match widget.with(|v| v.logo_href()) {
        Some(href) => view! {
            <image class="content-logo" href=href width=VIEW_SIZE height=VIEW_SIZE/>
        }
        .into_view(),
        None => view! { <PlaceholderIcon/> }.into_view(),
    };

    view! {
        <svg
            class="content-icon"
            width=VIEW_SIZE
            height=VIEW_SIZE
            viewBox=format!("0 0 {} {}", VIEW_SIZE, VIEW_SIZE)
        >
            <circle
                class="circle-background"
                cx=CENTER
                cy=CENTER
                r=RADIUS
                stroke-width="1px"
            />
            <circle
                class="circle-status"
                cx=CENTER
                cy=CENTER
                r=RADIUS
                stroke-width="1px"
                transform=meter::rotation()
                style=status_style
            />
            {icon}
        </svg>
    }
}
