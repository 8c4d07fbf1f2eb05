//! News markup

use crate::{
    format::html::{empty_placeholder, Escaped},
    view::news::{NewsArticleView, NewsView},
};

pub fn news_card(item: &NewsView) -> String {
    let image = match &item.image_url {
        Some(url) => format!(
            r#"<img class="news-card__image" src="{}" alt="{}" loading="lazy">"#,
            Escaped(url),
            Escaped(&item.title)
        ),
        None => String::new(),
    };

    let tags: String = item
        .tags
        .iter()
        .map(|t| format!(r#"<span class="tag">#{}</span>"#, Escaped(t)))
        .collect();

    format!(
        concat!(
            r#"<article class="news-card{featured}" data-news-id="{id}">"#,
            "{image}",
            r#"<span class="news-card__category" data-category="{category}">{category_label}</span>"#,
            r#"<time class="news-card__date">{date}</time>"#,
            r#"<h3 class="news-card__title"><a href="{url}">{title}</a></h3>"#,
            r#"<p class="news-card__excerpt">{excerpt}</p>"#,
            r#"<div class="news-card__tags">{tags}</div>"#,
            "</article>"
        ),
        featured = if item.featured { " news-card--featured" } else { "" },
        id = Escaped(&item.id),
        image = image,
        category = Escaped(&item.category),
        category_label = Escaped(&item.category_label),
        date = Escaped(&item.date_display),
        url = Escaped(&item.url),
        title = Escaped(&item.title),
        excerpt = Escaped(&item.excerpt),
        tags = tags,
    )
}

pub fn news_list(items: &[NewsView]) -> String {
    if items.is_empty() {
        return empty_placeholder("Новин не знайдено");
    }
    let cards: String = items.iter().map(news_card).collect();
    format!(r#"<div class="news-grid">{}</div>"#, cards)
}

pub fn news_article(article: &NewsArticleView) -> String {
    let item = &article.summary;
    let image = match &item.image_url {
        Some(url) => format!(
            r#"<img class="news-article__image" src="{}" alt="{}">"#,
            Escaped(url),
            Escaped(&item.title)
        ),
        None => String::new(),
    };
    let author = match &item.author {
        Some(author) => format!(r#"<span class="news-article__author">{}</span>"#, Escaped(author)),
        None => String::new(),
    };
    let body: String = article
        .paragraphs
        .iter()
        .map(|p| format!("<p>{}</p>", Escaped(p)))
        .collect();
    let tags: String = item
        .tags
        .iter()
        .map(|t| format!(r#"<span class="tag">#{}</span>"#, Escaped(t)))
        .collect();

    format!(
        concat!(
            r#"<article class="news-article" data-news-id="{id}">"#,
            r#"<span class="news-article__category" data-category="{category}">{category_label}</span>"#,
            r#"<h1 class="news-article__title">{title}</h1>"#,
            r#"<div class="news-article__meta"><time>{date}</time>{author}</div>"#,
            "{image}",
            r#"<div class="news-article__body">{body}</div>"#,
            r#"<div class="news-article__tags">{tags}</div>"#,
            "</article>"
        ),
        id = Escaped(&item.id),
        category = Escaped(&item.category),
        category_label = Escaped(&item.category_label),
        title = Escaped(&item.title),
        date = Escaped(&item.date_display),
        author = author,
        image = image,
        body = body,
        tags = tags,
    )
}

/// Prev/next controls plus numbered pages when the total is known
///
/// `page` is zero-based.
pub fn pagination(page: u32, total_pages: Option<u32>, has_next: bool) -> String {
    let has_prev = page > 0;
    if !has_prev && !has_next {
        return String::new();
    }

    let mut html = String::from(r#"<nav class="pagination">"#);
    html.push_str(&format!(
        r#"<button type="button" data-page="{}"{}>‹</button>"#,
        page.saturating_sub(1),
        if has_prev { "" } else { " disabled" }
    ));
    if let Some(total) = total_pages {
        for p in 0..total {
            html.push_str(&format!(
                r#"<button type="button" data-page="{}"{}>{}</button>"#,
                p,
                if p == page { r#" class="active""# } else { "" },
                p + 1
            ));
        }
    }
    html.push_str(&format!(
        r#"<button type="button" data-page="{}"{}>›</button>"#,
        page.saturating_add(1),
        if has_next { "" } else { " disabled" }
    ));
    html.push_str("</nav>");
    html
}
