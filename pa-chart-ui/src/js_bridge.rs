//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! The Google Charts loader (`gstatic.com/charts/loader.js`) is included by
//! the page markup; the render helpers live in `assets/js/presence-charts.js`
//! and are embedded at compile time. They are evaluated as globals (no ES
//! modules) and exposed via `window.*`. This module provides safe Rust
//! wrappers that initialize the loader and call those globals.

// Embed the chart render helpers at compile time.
static PRESENCE_CHARTS_JS: &str = include_str!("../assets/js/presence-charts.js");

/// Which Google Charts visualization a view draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Column,
    Timeline,
    Pie,
}

impl ChartKind {
    /// Name of the `window.*` render helper for this chart kind.
    fn render_function(self) -> &'static str {
        match self {
            ChartKind::Column => "renderColumnChart",
            ChartKind::Timeline => "renderTimelineChart",
            ChartKind::Pie => "renderPieChart",
        }
    }

    /// Loader package list as a JS array literal.
    fn loader_packages(self) -> &'static str {
        match self {
            ChartKind::Column | ChartKind::Pie => r#"["corechart"]"#,
            ChartKind::Timeline => r#"["corechart", "timeline"]"#,
        }
    }
}

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('presence JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Initialize the Google Charts loader for one chart kind. Call once at
/// app startup.
///
/// The render helpers are `function` declarations. To ensure they become
/// globally accessible (not block-scoped inside the load callback), they
/// are evaluated at global scope via indirect `eval()` once the loader is
/// ready, and then explicitly promoted to `window.*`. The `language` tag
/// is passed through to the loader untouched.
pub fn init_charts(kind: ChartKind, language: &str) {
    // Store the scripts on window so the load callback can eval them
    // at global scope.
    let store_js = format!(
        "window.__presenceChartScripts = {};",
        serde_json::to_string(PRESENCE_CHARTS_JS).unwrap_or_default()
    );
    let _ = js_sys::eval(&store_js);

    let init_js = format!(
        r#"
        (function() {{
            var waitForLoader = setInterval(function() {{
                if (typeof google !== 'undefined' && google.charts) {{
                    clearInterval(waitForLoader);
                    google.charts.load('current', {{packages: {packages}, language: '{language}'}});
                    google.charts.setOnLoadCallback(function() {{
                        // Eval at global scope via indirect eval
                        (0, eval)(window.__presenceChartScripts);
                        delete window.__presenceChartScripts;
                        // Promote function declarations to window explicitly
                        if (typeof renderColumnChart !== 'undefined') window.renderColumnChart = renderColumnChart;
                        if (typeof renderTimelineChart !== 'undefined') window.renderTimelineChart = renderTimelineChart;
                        if (typeof renderPieChart !== 'undefined') window.renderPieChart = renderPieChart;
                        window.__presenceChartsReady = true;
                        console.log('presence charts initialized');
                    }});
                }}
            }}, 100);
        }})();
        "#,
        packages = kind.loader_packages(),
        language = language,
    );
    let _ = js_sys::eval(&init_js);
}

/// Draw a chart into the given container.
///
/// Uses a polling loop to wait for the Google Charts loader, the render
/// helpers, and the container DOM element (which only mounts once the view
/// enters its populated state). The `generation` value is the request
/// generation that produced this draw; a queued draw whose generation has
/// been superseded gives up instead of overwriting a newer chart.
pub fn render_chart(
    kind: ChartKind,
    container_id: &str,
    data_json: &str,
    options_json: &str,
    generation: u64,
) {
    let render_fn = kind.render_function();
    let escaped_data = data_json.replace('\'', "\\'").replace('\n', "");
    let escaped_options = options_json.replace('\'', "\\'").replace('\n', "");
    call_js(&format!(
        r#"
        (function() {{
            window.__presenceRenderSeq = {generation};
            var poll = setInterval(function() {{
                if (window.__presenceRenderSeq !== {generation}) {{
                    clearInterval(poll);
                    return;
                }}
                if (window.__presenceChartsReady &&
                    typeof window.{render_fn} !== 'undefined' &&
                    document.getElementById('{container_id}')) {{
                    clearInterval(poll);
                    try {{
                        window.{render_fn}('{container_id}', '{escaped_data}', '{escaped_options}');
                    }} catch(e) {{ console.error('[presence] {render_fn} error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}
