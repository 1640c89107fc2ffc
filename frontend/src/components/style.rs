//! Stylesheets: the page-wide global layer and the widget's own rules.
//!
//! Widget rules that would otherwise collide between instances use class
//! names with a random per-mount suffix (see [`ScopedClass`]).

use leptos::*;
use leptos_meta::Style;

/// Palette shared by the page and the widget.
pub mod colors {
    pub const PURE_WHITE: &str = "#FFFFFF";
    pub const BG1: &str = "#EEF3F9";
    pub const BG2: &str = "#E1E6ED";
    pub const BG3: &str = "#F5F9FE";
    pub const BORDER1: &str = "#2B7DE9";
    pub const TX1: &str = "#1D2733";
    pub const TX2: &str = "#505D6D";
    pub const TX3: &str = "#8A96A3";
}

use colors::*;

/// Generates class names unique to one widget instance.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScopedClass {
    suffix: String,
}

impl ScopedClass {
    pub fn new() -> Self {
        let id: u32 = rand::random();
        Self {
            suffix: hex::encode(id.to_be_bytes()),
        }
    }

    /// `base` suffixed with this instance's id.
    pub fn name(&self, base: &str) -> String {
        format!("{}-{}", base, self.suffix)
    }
}

impl Default for ScopedClass {
    fn default() -> Self {
        Self::new()
    }
}

fn global_css() -> String {
    format!(
        r#"
html, body {{
  margin: 0;
  padding: 0;
  min-height: 100%;
  font-family: "Helvetica Neue", Helvetica, Arial, sans-serif;
  background: {BG1};
  color: {TX1};
}}
main {{
  display: flex;
  min-height: 100vh;
  align-items: center;
  justify-content: center;
}}
"#
    )
}

/// Page-wide base styles.
#[component]
pub fn GlobalStyle() -> impl IntoView {
    view! { <Style>{global_css()}</Style> }
}

/// Rules for one widget instance.
pub fn widget_css(scope: &ScopedClass) -> String {
    let here = scope.name("here");
    let or = scope.name("or");
    let select = scope.name("select");

    format!(
        r#"
.upload-file {{
  width: 400px;
  height: 590px;
  margin: 0 auto;
  align-self: center;
  background: {PURE_WHITE};
  border: 1px solid {BG2};
  box-sizing: border-box;
}}
.upload-file .upload-header {{
  height: 79px;
  border-bottom: 1px solid {BG2};
}}
.upload-file .header-text {{
  position: relative;
  width: 347px;
  height: 20px;
  margin: 0 auto;
  font-style: normal;
}}
.upload-file .header-title {{
  top: 21px;
  font-weight: bold;
  font-size: 20px;
  line-height: 20px;
  color: {TX1};
}}
.upload-file .header-description {{
  top: 20px;
  font-size: 12px;
  line-height: 12px;
  display: flex;
  align-items: center;
  color: {TX3};
}}
.upload-file .upload-content {{
  width: 360px;
  height: 470px;
  margin: 19px auto;
}}
.upload-file .content-dropzone {{
  height: 100%;
  width: 100%;
  box-sizing: border-box;
  border: 1px dashed transparent;
  background-color: {PURE_WHITE};
  display: flex;
  align-items: center;
  justify-content: center;
  flex-direction: column;
  font-size: 16px;
}}
.upload-file .content-highlight {{
  background-color: {BG3};
  border-color: {BORDER1};
}}
.upload-file .content-icon {{
  height: 80px;
  width: 80px;
  border-radius: 50%;
  box-sizing: border-box;
  display: flex;
  overflow: hidden;
  background-color: {PURE_WHITE};
}}
.upload-file .content-fileinput {{
  display: none;
}}
.upload-file .content-text {{
  font-size: 12px;
  line-height: 12px;
  text-align: center;
}}
.upload-file .circle-background,
.upload-file .circle-status {{
  fill: none;
}}
.upload-file .circle-background {{
  stroke: {BG1};
}}
.upload-file .circle-status {{
  transition: stroke-dashoffset 0.2s linear;
}}
.{here} {{
  padding-top: 9px;
  color: {TX2};
}}
.{or} {{
  padding-top: 8px;
  color: {TX3};
}}
.{select} {{
  padding-top: 4px;
  color: {BORDER1};
  cursor: pointer;
}}
"#
    )
}
