//! Placeholder building graphic shown until a logo is uploaded.

use leptos::*;

const FILL: &str = "#D1E3F8";

#[component]
pub fn PlaceholderIcon() -> impl IntoView {
    view! {
        <svg
            class="content-icon-alt"
            width="29.63"
            height="45.93"
            viewBox="0 0 32 48"
            x="24.69"
            y="18.23"
            fill="none"
        >
            <path
                fill-rule="evenodd"
                clip-rule="evenodd"
                d="M28.072 1.87489C29.3858 1.3494 30.8148 2.31692 30.8148 3.73184V46.7037H1.18518V13.9837C1.18518 13.1659 1.68308 12.4305 2.4424 12.1267L28.072 1.87489Z"
                stroke=FILL
            />
            <rect x="7.11108" y="17.0745" width="7.40741" height="8.88889" fill=FILL/>
            <rect x="17.4815" y="17.0745" width="7.40741" height="2.96296" fill=FILL/>
            <rect x="17.4815" y="11.1486" width="7.40741" height="2.96296" fill=FILL/>
            <rect x="17.4815" y="23.0004" width="7.40741" height="2.96296" fill=FILL/>
            <path
                d="M7.11108 29.9264C7.11108 29.3741 7.5588 28.9264 8.11108 28.9264H23.8889C24.4411 28.9264 24.8889 29.3741 24.8889 29.9264V46.7041H7.11108V29.9264Z"
                fill=FILL
            />
        </svg>
    }
}
