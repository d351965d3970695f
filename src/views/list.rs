//! The list page.

use std::fmt::Write;

use crate::model::{Item, ListTarget};
use crate::views::escape_html;

/// Everything needed to render one list.
#[derive(Debug, Clone, Copy)]
pub struct ListPage<'a> {
    /// Where add and delete submissions go.
    pub target: &'a ListTarget,
    /// Items in display order.
    pub items: &'a [Item],
}

impl<'a> ListPage<'a> {
    pub fn new(target: &'a ListTarget, items: &'a [Item]) -> Self {
        Self { target, items }
    }
}

fn header(title: &str) -> String {
    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{title}</title>\n\
         </head>\n\
         <body>\n"
    )
}

fn footer() -> &'static str {
    "<footer>Copyright &copy; To Do List</footer>\n</body>\n</html>\n"
}

/// Render a list as a complete HTML document.
///
/// Each item gets its own delete form with a checkbox that submits on
/// change. The hidden `listName` and `list` fields carry the target key,
/// which for the default list differs from its displayed title.
pub fn render_list(page: &ListPage<'_>) -> String {
    let title = escape_html(page.target.title());
    let key = escape_html(page.target.as_field());

    let mut html = header(&title);
    let _ = writeln!(html, "<div class=\"box\" id=\"heading\">\n<h1>{title}</h1>\n</div>");
    html.push_str("<div class=\"box\">\n");

    for item in page.items {
        let _ = writeln!(
            html,
            "<form action=\"/delete\" method=\"post\">\n\
             <div class=\"item\">\n\
             <input type=\"checkbox\" name=\"checkbox\" value=\"{id}\" onChange=\"this.form.submit()\">\n\
             <p>{name}</p>\n\
             </div>\n\
             <input type=\"hidden\" name=\"listName\" value=\"{key}\">\n\
             </form>",
            id = item.id,
            name = escape_html(&item.name),
        );
    }

    let _ = writeln!(
        html,
        "<form class=\"item\" action=\"/\" method=\"post\">\n\
         <input type=\"text\" name=\"newItem\" placeholder=\"New Item\" autocomplete=\"off\">\n\
         <button type=\"submit\" name=\"list\" value=\"{key}\">+</button>\n\
         </form>"
    );
    html.push_str("</div>\n");
    html.push_str(footer());
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::default_items;

    #[test]
    fn renders_items_in_order_with_ids() {
        let items = default_items();
        let target = ListTarget::Named("Work".into());
        let html = render_list(&ListPage::new(&target, &items));

        assert!(html.contains("<h1>Work</h1>"));
        let positions: Vec<_> = items
            .iter()
            .map(|item| html.find(&format!("value=\"{}\"", item.id)).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert!(html.contains("Hit the + button to add a new item."));
        assert_eq!(html.matches("name=\"listName\" value=\"Work\"").count(), 3);
        assert!(html.contains("name=\"list\" value=\"Work\""));
    }

    #[test]
    fn default_list_posts_sentinel_under_its_title() {
        let html = render_list(&ListPage::new(&ListTarget::Default, &[]));

        assert!(html.contains("<title>To Do List</title>"));
        assert!(html.contains("<h1>To Do List</h1>"));
        assert!(html.contains("name=\"list\" value=\"Today\""));
        assert!(!html.contains("name=\"checkbox\""));
    }

    #[test]
    fn escapes_item_and_list_names() {
        let items = vec![Item::new("<script>alert(1)</script>")];
        let target = ListTarget::Named("A&B".into());
        let html = render_list(&ListPage::new(&target, &items));

        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(html.contains("<h1>A&amp;B</h1>"));
        assert!(html.contains("value=\"A&amp;B\""));
    }
}
