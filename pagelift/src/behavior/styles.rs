use pagedom::Document;

use crate::config::EnhanceConfig;

/// Ensure the enhancement stylesheet exists in the document head.
/// Re-invocation never duplicates the block. Returns true when injected.
pub fn ensure_styles(doc: &mut Document, config: &EnhanceConfig) -> bool {
    if doc.has_stylesheet(&config.stylesheet_id) {
        return false;
    }

    let c = &config.classes;
    let css = format!(
        concat!(
            "[{reveal_attr}] {{ opacity: 0; transform: translateY(30px); ",
            "transition: opacity 0.6s ease, transform 0.6s ease; }}\n",
            ".{visible} {{ opacity: 1; transform: translateY(0); }}\n",
            ".{error} {{ border-color: #e74c3c; }}\n",
            ".{error_message} {{ color: #e74c3c; font-size: 0.85em; }}\n",
            ".{success_banner} {{ padding: 12px; border-radius: 4px; ",
            "background: #2ecc71; color: #fff; transition: opacity 0.3s ease; }}\n",
            ".{ripple} {{ position: absolute; border-radius: 50%; ",
            "animation: ripple 0.6s linear; pointer-events: none; }}\n",
            ".{keyboard_nav} :focus {{ outline: 2px solid #3498db; outline-offset: 2px; }}\n",
        ),
        reveal_attr = config.markers.reveal_attr,
        visible = c.visible,
        error = c.error,
        error_message = c.error_message,
        success_banner = c.success_banner,
        ripple = c.ripple,
        keyboard_nav = c.keyboard_nav,
    );

    doc.ensure_stylesheet(config.stylesheet_id.as_str(), css)
}
