//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! D3.js chart functions live in `assets/js/*.js` and are embedded at
//! compile time. They are evaluated as globals (no ES modules) and exposed
//! via `window.*`. This module provides safe Rust wrappers that serialize
//! data and call those globals.

// Embed all D3 chart JS files at compile time
static TOOLTIP_JS: &str = include_str!("../assets/js/tooltip.js");
static ANNUAL_CHART_JS: &str = include_str!("../assets/js/annual-chart.js");
static MONTHLY_CHART_JS: &str = include_str!("../assets/js/monthly-chart.js");

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('CDE JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Initialize chart scripts with a wait-for-D3 polling loop.
///
/// The chart JS files define functions like `renderAnnualChart(...)` via
/// `function` declarations. To ensure they become globally accessible
/// (not block-scoped inside the setInterval callback), we evaluate them
/// at global scope via indirect `eval()` once D3 is ready, and then
/// explicitly promote each function to `window.*`.
pub fn init_charts() {
    let all_js = [TOOLTIP_JS, ANNUAL_CHART_JS, MONTHLY_CHART_JS].join("\n");

    // Store the scripts on window so the polling callback can eval them
    // at global scope (not block-scoped inside setInterval).
    let store_js = format!(
        "window.__cdeChartScripts = {};",
        serde_json::to_string(&all_js).unwrap_or_default()
    );
    let _ = js_sys::eval(&store_js);

    let init_js = r#"
        (function() {
            if (window.__cdeChartsReady) { delete window.__cdeChartScripts; return; }
            var waitForD3 = setInterval(function() {
                if (typeof d3 !== 'undefined') {
                    clearInterval(waitForD3);
                    (0, eval)(window.__cdeChartScripts);
                    delete window.__cdeChartScripts;
                    if (typeof renderAnnualChart !== 'undefined') window.renderAnnualChart = renderAnnualChart;
                    if (typeof renderMonthlyChart !== 'undefined') window.renderMonthlyChart = renderMonthlyChart;
                    if (typeof initTooltip !== 'undefined') window.initTooltip = initTooltip;
                    if (typeof showTooltip !== 'undefined') window.showTooltip = showTooltip;
                    if (typeof hideTooltip !== 'undefined') window.hideTooltip = hideTooltip;
                    window.__cdeChartsReady = true;
                    console.log('CDE charts initialized');
                }
            }, 100);
        })();
    "#;
    let _ = js_sys::eval(init_js);
}

/// Render the annual chart (mean line per station, optional ±1σ band).
///
/// Uses a polling loop to wait for D3.js to load, chart scripts to
/// initialize, and the container DOM element to exist before rendering.
pub fn render_annual_chart(container_id: &str, data_json: &str, config_json: &str) {
    render_when_ready(container_id, "renderAnnualChart", data_json, config_json);
}

/// Render the monthly chart (one continuous monthly line per station).
pub fn render_monthly_chart(container_id: &str, data_json: &str, config_json: &str) {
    render_when_ready(container_id, "renderMonthlyChart", data_json, config_json);
}

fn render_when_ready(container_id: &str, function: &str, data_json: &str, config_json: &str) {
    let escaped_data = data_json.replace('\'', "\\'").replace('\n', "");
    let escaped_config = config_json.replace('\'', "\\'").replace('\n', "");
    call_js(&format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (window.__cdeChartsReady &&
                    typeof window.{function} !== 'undefined' &&
                    document.getElementById('{container_id}')) {{
                    clearInterval(poll);
                    try {{
                        window.{function}('{container_id}', '{escaped_data}', '{escaped_config}');
                    }} catch(e) {{ console.error('[CDE] {function} error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Destroy/clean up a chart in the given container.
pub fn destroy_chart(container_id: &str) {
    call_js(&format!(
        "var el = document.getElementById('{}'); if (el) el.innerHTML = '';",
        container_id
    ));
}

/// Trigger a browser download of `content` as a CSV file.
pub fn download_csv(filename: &str, content: &str) {
    // JSON-encode the body so arbitrary CSV text survives as a JS literal
    let content_literal = serde_json::to_string(content).unwrap_or_default();
    call_js(&format!(
        r#"
        var blob = new Blob([{content_literal}], {{ type: 'text/csv;charset=utf-8' }});
        var url = URL.createObjectURL(blob);
        var a = document.createElement('a');
        a.href = url;
        a.download = '{filename}';
        document.body.appendChild(a);
        a.click();
        document.body.removeChild(a);
        URL.revokeObjectURL(url);
        "#,
    ));
}

/// Inject the global stylesheet once at startup.
pub fn inject_stylesheet(css: &str) {
    let css_literal = serde_json::to_string(css).unwrap_or_default();
    call_js(&format!(
        r#"
        if (!document.getElementById('cde-global-style')) {{
            var style = document.createElement('style');
            style.id = 'cde-global-style';
            style.textContent = {css_literal};
            document.head.appendChild(style);
        }}
        "#,
    ));
}
