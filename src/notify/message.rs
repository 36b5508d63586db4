use crate::domain::{Announcement, Event, NewsArticle};

/// A content item being announced to the mailing list, borrowed from the
/// create handler that just stored it.
pub enum Publication<'a> {
    News(&'a NewsArticle),
    Announcement(&'a Announcement),
    Event(&'a Event),
}

impl Publication<'_> {
    pub fn subject(&self) -> String {
        match self {
            Publication::News(article) => format!("New Content: {}", article.title),
            Publication::Announcement(_) => "New Announcement".to_string(),
            Publication::Event(event) => format!("Upcoming Event: {}", event.title),
        }
    }

    pub fn text_body(&self, site_url: &str) -> String {
        let mut body = String::from("Hello Subscriber,\n\n");

        match self {
            Publication::News(article) => {
                body.push_str("A new article has been published:\n\n");
                body.push_str(&format!("Title: {}\n", article.title));
                body.push_str(&format!("Author: {}\n\n", article.author));
                body.push_str(&article.content);
                body.push_str(&format!("\n\nView all news: {}/news\n", site_url));
            }
            Publication::Announcement(announcement) => {
                body.push_str("A new announcement has been posted:\n\n");
                body.push_str(&announcement.content);
                body.push_str(&format!("\n\nView all announcements: {}/announcements\n", site_url));
            }
            Publication::Event(event) => {
                body.push_str("An event has been scheduled:\n\n");
                body.push_str(&format!("Title: {}\n", event.title));
                body.push_str(&format!("Date: {}\n", event.date));
                body.push_str(&format!("Time: {}\n", event.time));
                body.push_str(&format!("Location: {}\n", event.location));
                body.push_str(&format!("\nView all events: {}/events\n", site_url));
            }
        }

        body.push_str("\nRegards,\nYour Newsletter Team");
        body
    }

    pub fn html_body(&self, site_url: &str) -> String {
        let mut html = String::from("<div>\n<p>Hello Subscriber,</p>\n");

        match self {
            Publication::News(article) => {
                html.push_str("<p>A new article has been published:</p>\n");
                html.push_str("<div style=\"margin: 20px 0; padding: 15px; border-left: 4px solid #087444;\">\n");
                html.push_str(&format!("<h2 style=\"color: #087444;\">{}</h2>\n", article.title));
                html.push_str(&format!("<p><strong>Author:</strong> {}</p>\n", article.author));
                html.push_str(&format!(
                    "<div style=\"margin-top: 10px;\">{}</div>\n",
                    article.content.replace('\n', "<br>")
                ));
                for image in &article.images {
                    html.push_str(&format!(
                        "<img src=\"{}\" alt=\"Article image\" style=\"max-width: 100%; height: auto; margin-bottom: 10px;\">\n",
                        image
                    ));
                }
                html.push_str("</div>\n");
                html.push_str(&link_button(site_url, "news", "View All News"));
            }
            Publication::Announcement(announcement) => {
                html.push_str("<p>A new announcement has been posted:</p>\n");
                html.push_str("<div style=\"margin: 20px 0; padding: 15px; border-left: 4px solid #087444;\">\n");
                html.push_str(&format!(
                    "<div>{}</div>\n",
                    announcement.content.replace('\n', "<br>")
                ));
                html.push_str("</div>\n");
                html.push_str(&link_button(site_url, "announcements", "View All Announcements"));
            }
            Publication::Event(event) => {
                html.push_str("<p>An event has been scheduled:</p>\n");
                html.push_str("<div style=\"margin: 20px 0; padding: 15px; border-left: 4px solid #087444;\">\n");
                html.push_str(&format!("<h2 style=\"color: #087444;\">{}</h2>\n", event.title));
                html.push_str(&format!("<p><strong>Date:</strong> {}</p>\n", event.date));
                html.push_str(&format!("<p><strong>Time:</strong> {}</p>\n", event.time));
                html.push_str(&format!("<p><strong>Location:</strong> {}</p>\n", event.location));
                html.push_str("</div>\n");
                html.push_str(&link_button(site_url, "events", "View All Events"));
            }
        }

        html.push_str("<p>Regards,<br>Your Newsletter Team</p>\n</div>");
        html
    }
}

fn link_button(site_url: &str, path: &str, label: &str) -> String {
    format!(
        "<p style=\"margin-top: 20px;\"><a href=\"{}/{}\" style=\"display: inline-block; background-color: #087444; color: white; padding: 10px 20px; text-decoration: none; border-radius: 4px;\">{}</a></p>\n",
        site_url, path, label
    )
}
