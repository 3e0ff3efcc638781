use crate::card::escape_html;
use crate::feed::PageSurface;
use chrono::{Datelike, Utc};

/// Wraps a rendered surface in a standalone portfolio page: a projects
/// section holding the card container and the error element, plus a footer
/// year stamp. The error element carries `hidden` unless the feed revealed
/// it.
pub fn render_page(title: &str, surface: &PageSurface) -> String {
    let error_el = match surface.error() {
        Some(message) => format!(
            "<div id=\"projects-error\" class=\"error\">{}</div>",
            escape_html(message)
        ),
        None => "<div id=\"projects-error\" class=\"error\" hidden></div>".to_string(),
    };

    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
           <meta charset=\"utf-8\">\n\
           <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
           <title>{title}</title>\n\
         </head>\n\
         <body>\n\
           <main>\n\
             <section id=\"projects\">\n\
               <h2>Projects</h2>\n\
               <div id=\"project-list\">{container}</div>\n\
               {error_el}\n\
             </section>\n\
           </main>\n\
           <footer>\n\
             <p>© <span id=\"year\">{year}</span> {title}</p>\n\
           </footer>\n\
         </body>\n\
         </html>\n",
        title = escape_html(title),
        container = surface.container(),
        error_el = error_el,
        year = Utc::now().year(),
    )
}
