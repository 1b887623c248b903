use crate::models::{DeviceClass, Group};

/// Assembles the whole document: head, logo, product name, the selector
/// form, then the pre-rendered schedule fragment. The charset declaration
/// must match the byte encoding the transport layer applies to the body.
pub fn render_page(
    product_name: &str,
    groups: &[Group],
    selected_group: Option<&str>,
    active_week: Option<i64>,
    device: DeviceClass,
    schedule_html: &str,
) -> String {
    let mut html = String::from("<html><head><meta charset=\"windows-1251\" />");
    if device.is_mobile() {
        html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\" />");
    }
    html.push_str(
        "<link rel=\"stylesheet\" href=\"/public/style.css\" /><title>Расписание</title></head><body>",
    );
    html.push_str("<img src=\"/public/logo.gif\" /><br />");
    html.push_str(product_name);

    html.push_str("<form>Расписание<select name=\"group\"><option value=\"none\">Группа</option>");
    for group in groups {
        if selected_group == Some(group.id.as_str()) {
            html.push_str(&format!(
                "<option value=\"{}\" selected>{}</option>",
                group.id, group.name
            ));
        } else {
            html.push_str(&format!(
                "<option value=\"{}\">{}</option>",
                group.id, group.name
            ));
        }
    }
    html.push_str("</select><br />Неделя:");

    let week_value = active_week.map_or_else(|| "1".to_string(), |week| week.to_string());
    html.push_str(&format!(
        "<input type=\"number\" name=\"week\" value=\"{week_value}\" min=\"1\" placeholder=\"Неделя\" />"
    ));
    html.push_str("<input type=\"submit\" name=\"custom\" value=\"Получить\" />");
    html.push_str("<input type=\"submit\" name=\"current\" value=\"Текущая неделя\" />");
    html.push_str("<input type=\"submit\" name=\"next\" value=\"Следующая неделя\" />");
    html.push_str("</form>");

    html.push_str(schedule_html);
    html.push_str("</body></html>");
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::SELECT_GROUP_PROMPT;

    fn groups() -> Vec<Group> {
        vec![
            Group {
                id: "101".to_string(),
                name: "ИС-21".to_string(),
            },
            Group {
                id: "102".to_string(),
                name: "ПО-22".to_string(),
            },
        ]
    }

    #[test]
    fn page_declares_legacy_charset() {
        let html = render_page(
            "Колледж",
            &groups(),
            None,
            None,
            DeviceClass::Desktop,
            SELECT_GROUP_PROMPT,
        );
        assert!(html.contains("<meta charset=\"windows-1251\" />"));
        assert!(html.contains("<title>Расписание</title>"));
    }

    #[test]
    fn viewport_meta_only_on_mobile() {
        let desktop = render_page("n", &[], None, None, DeviceClass::Desktop, "");
        let mobile = render_page("n", &[], None, None, DeviceClass::Mobile, "");
        assert!(!desktop.contains("viewport"));
        assert!(mobile.contains("<meta name=\"viewport\""));
    }

    #[test]
    fn selected_group_is_marked() {
        let html = render_page("n", &groups(), Some("102"), None, DeviceClass::Desktop, "");
        assert!(html.contains("<option value=\"102\" selected>ПО-22</option>"));
        assert!(html.contains("<option value=\"101\">ИС-21</option>"));
        assert!(html.contains("<option value=\"none\">Группа</option>"));
    }

    #[test]
    fn week_input_defaults_to_one() {
        let html = render_page("n", &[], None, None, DeviceClass::Desktop, "");
        assert!(html.contains("name=\"week\" value=\"1\""));
    }

    #[test]
    fn week_input_prefills_resolved_week() {
        let html = render_page("n", &[], None, Some(14), DeviceClass::Desktop, "");
        assert!(html.contains("name=\"week\" value=\"14\""));
    }

    #[test]
    fn schedule_fragment_lands_after_the_form() {
        let html = render_page(
            "n",
            &[],
            None,
            None,
            DeviceClass::Desktop,
            SELECT_GROUP_PROMPT,
        );
        let form_end = html.find("</form>").unwrap();
        let prompt = html.find(SELECT_GROUP_PROMPT).unwrap();
        assert!(prompt > form_end);
    }

    #[test]
    fn form_carries_all_three_submit_controls() {
        let html = render_page("n", &[], None, None, DeviceClass::Desktop, "");
        assert!(html.contains("name=\"custom\" value=\"Получить\""));
        assert!(html.contains("name=\"current\" value=\"Текущая неделя\""));
        assert!(html.contains("name=\"next\" value=\"Следующая неделя\""));
    }
}
