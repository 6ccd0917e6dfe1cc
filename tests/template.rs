// Render pass behavior of TemplateBase
use blade_helpers::{OutputBuffer, TemplateBase, TemplateHelpers};

struct Greeting {
    base: TemplateBase,
    name: String,
}

impl Greeting {
    fn render(&mut self) -> String {
        let name = self.name.clone();
        self.base.render(|t| {
            t.write("<h1>Hello, ");
            let escaped = t.html_encode(name.as_str());
            t.write(&escaped);
            t.write("</h1><a href=\"");
            let link = t.url_encode(format!("/users?name={name}").as_str());
            t.write(&link);
            t.write("\">");
            t.write_value(name.len());
            t.write("</a>");
        })
    }
}

#[test]
fn test_render_returns_output_and_clears_buffer() {
    let mut page = Greeting {
        base: TemplateBase::new(),
        name: "<Ann Lee>".to_string(),
    };

    let html = page.render();
    assert_eq!(
        html,
        "<h1>Hello, &lt;Ann Lee&gt;</h1><a href=\"/users?name=%3CAnn%20Lee%3E\">9</a>"
    );
    assert!(page.base.buffer().is_empty());

    // A second pass starts from an empty buffer.
    assert_eq!(page.render(), html);
}

#[test]
fn test_buffer_access() {
    let mut base = TemplateBase::new();
    base.write("a");
    base.buffer_mut().write_value('b');
    assert_eq!(base.buffer().as_str(), "ab");
    assert_eq!(base.render(|_| {}), "ab");
    assert_eq!(base.buffer(), &OutputBuffer::new());
}
