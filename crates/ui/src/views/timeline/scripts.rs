pub(super) fn measure_timeline_script(container_id: &str, item_selector: &str) -> String {
    format!(
        r#"(function() {{
                    const send = () => {{
                        const container = document.getElementById({container_id:?});
                        if (!container) {{
                            dioxus.send([]);
                            return;
                        }}
                        const items = container.querySelectorAll({item_selector:?});
                        dioxus.send(Array.from(items).map((el) => el.offsetTop));
                    }};
                    const state = window.__courseTimelineMeasure
                        || (window.__courseTimelineMeasure = {{ handler: null }});
                    if (state.handler) {{
                        window.removeEventListener("resize", state.handler);
                    }}
                    state.handler = send;
                    window.addEventListener("resize", send);
                    send();
                }})();"#,
        container_id = container_id,
        item_selector = item_selector,
    )
}
