//! Server-side HTML for the to-do page.
//!
//! Everything here only reads the session; all state changes go through the form
//! handlers in [`crate::routes`].
use notepad::{Note, Notification, TodoSession};
use std::fmt::Write;

pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            c => escaped.push(c),
        }
    }
    escaped
}

/// The whole page.
///
/// `alert` is a blocking validation message from the last submission, if any.
pub fn page(session: &TodoSession, alert: Option<&str>) -> String {
    let mut html = String::new();
    html.push_str(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>NOTE PAD</title>\n\
         <link rel=\"stylesheet\" href=\"/static/notepad.css\">\n</head>\n<body>\n",
    );
    html.push_str("<header class=\"app-bar\"><div class=\"title\">NOTE PAD</div></header>\n");
    if let Some(notification) = session.notification().visible_notification() {
        snackbar(&mut html, notification);
    }
    if let Some(alert) = alert {
        let _ = writeln!(
            html,
            "<div class=\"alert\" role=\"alert\">{}</div>",
            escape_html(alert)
        );
    }
    new_todo_form(&mut html, alert.is_some() && !session.selection().is_edit_open());
    todo_list(&mut html, session.store().notes());
    option_drawer(&mut html, session);
    html.push_str("</body>\n</html>\n");
    html
}

fn snackbar(html: &mut String, notification: &Notification) {
    let _ = writeln!(
        html,
        "<div class=\"snackbar severity-{}\" role=\"status\">\
         <span>{}</span>\
         <form method=\"post\" action=\"/notification/close\"><button type=\"submit\">&times;</button></form>\
         </div>",
        notification.severity,
        escape_html(&notification.message)
    );
}

fn new_todo_form(html: &mut String, autofocus: bool) {
    let _ = writeln!(
        html,
        "<form class=\"new-todo\" method=\"post\" action=\"/todos\">\
         <textarea name=\"content\" rows=\"3\" autocomplete=\"off\" placeholder=\"Enter a new task.\"{}></textarea>\
         <button type=\"submit\">Add</button>\
         </form>",
        if autofocus { " autofocus" } else { "" }
    );
}

fn todo_list(html: &mut String, notes: &[Note]) {
    html.push_str("<ul class=\"todo-list\">\n");
    for (index, note) in notes.iter().enumerate() {
        todo_list_item(html, note, index);
    }
    html.push_str("</ul>\n");
}

fn todo_list_item(html: &mut String, note: &Note, index: usize) {
    let accent = if index % 2 == 0 { " accent" } else { "" };
    let _ = writeln!(
        html,
        "<li class=\"todo\" id=\"todo-{id}\">\
         <div class=\"chips\"><span class=\"chip\">No. {id} </span>\
         <span class=\"chip filled\">{created_at}</span></div>\
         <div class=\"card\">\
         <span class=\"check{accent}\">&#10003;</span>\
         <div class=\"content\">{content}</div>\
         <form method=\"post\" action=\"/todos/{id}/options\"><button type=\"submit\">&hellip;</button></form>\
         </div></li>",
        id = note.get_id(),
        created_at = note.created_at_display(),
        accent = accent,
        content = escape_html(note.get_content()),
    );
}

fn option_drawer(html: &mut String, session: &TodoSession) {
    let selection = session.selection();
    let Some(id) = selection.target_id() else {
        return;
    };
    let _ = writeln!(
        html,
        "<div class=\"drawer\">\
         <div class=\"drawer-header\">Number <strong>{id}</strong> Menu</div>\
         <form method=\"post\" action=\"/drawer/edit\"><button type=\"submit\">Change</button></form>\
         <form method=\"post\" action=\"/drawer/delete\"><button type=\"submit\">Delete</button></form>\
         <form method=\"post\" action=\"/drawer/close\"><button type=\"submit\">Close</button></form>\
         </div>",
        id = id
    );
    if let Some(draft) = session.edit_draft() {
        let _ = writeln!(
            html,
            "<div class=\"modal\">\
             <form method=\"post\" action=\"/drawer/edit/submit\">\
             <textarea name=\"content\" rows=\"3\" autocomplete=\"off\" placeholder=\"Enter a task.\" autofocus>{}</textarea>\
             <button type=\"submit\">Change</button>\
             </form>\
             <form method=\"post\" action=\"/drawer/edit/close\"><button type=\"submit\">Cancel</button></form>\
             </div>",
            escape_html(draft)
        );
    }
    if let Some(request) = session.pending_deletion() {
        let _ = writeln!(
            html,
            "<div class=\"modal confirm\" role=\"alertdialog\">\
             <p>{}</p>\
             <form method=\"post\" action=\"/drawer/delete/answer\">\
             <button type=\"submit\" name=\"confirmed\" value=\"true\">OK</button>\
             <button type=\"submit\" name=\"confirmed\" value=\"false\">Cancel</button>\
             </form>\
             </div>",
            escape_html(&request.prompt)
        );
    }
}
