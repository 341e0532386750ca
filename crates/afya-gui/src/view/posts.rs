//! Posts feed screen.

use iced::widget::{Space, button, column, container, row, scrollable, text};
use iced::{Alignment, Element, Length};

use afya_model::{Post, PostType};

use crate::component::{empty_state, error_state, loading_state};
use crate::message::{Message, PostsMessage};
use crate::state::AppState;
use crate::theme::{
    AFYA_GREEN, AMBER, GRAY_500, GRAY_700, GRAY_900, SPACING_MD, SPACING_SM, SPACING_XS, SUCCESS,
    WHITE, button_primary, button_secondary, card,
};

/// Renders the posts feed.
pub fn view_posts(state: &AppState) -> Element<'_, Message> {
    let header = row![
        text("Posts").size(20).color(GRAY_900),
        Space::new().width(Length::Fill),
        button(text("Refresh").size(13))
            .on_press(Message::Posts(PostsMessage::RefreshClicked))
            .padding([6.0, 12.0])
            .style(button_secondary),
        button(text("Add Post").size(13).color(WHITE))
            .on_press(Message::Posts(PostsMessage::ComposeClicked))
            .padding([6.0, 12.0])
            .style(button_primary),
    ]
    .spacing(SPACING_SM)
    .align_y(Alignment::Center);

    let body: Element<'_, Message> = if state.posts.is_loading() && state.posts.is_empty() {
        loading_state("Loading posts")
    } else if let Some(error) = state.posts.error() {
        error_state(
            "Couldn't load posts",
            error,
            Message::Posts(PostsMessage::RefreshClicked),
        )
    } else {
        let filtered = state.filtered_posts();
        if filtered.is_empty() {
            if state.search_query.is_empty() {
                empty_state("No posts yet", "Be the first to share a request or an offer")
            } else {
                empty_state("No matching posts", "Try a different search")
            }
        } else {
            let mut cards = column![].spacing(SPACING_SM);
            for post in filtered {
                cards = cards.push(post_card(post));
            }
            scrollable(cards).height(Length::Fill).into()
        }
    };

    column![header, Space::new().height(SPACING_MD), body]
        .padding(SPACING_MD)
        .into()
}

/// A single post card.
fn post_card(post: &Post) -> Element<'_, Message> {
    let type_color = match post.post_type {
        PostType::Request => AMBER,
        PostType::Offer => SUCCESS,
    };

    let content = column![
        row![
            text(&post.title).size(15).color(GRAY_900),
            Space::new().width(Length::Fill),
            text(post.post_type.as_str()).size(11).color(type_color),
        ]
        .align_y(Alignment::Center),
        Space::new().height(SPACING_XS),
        text(&post.drug_name).size(13).color(AFYA_GREEN),
        Space::new().height(SPACING_XS),
        text(&post.content).size(13).color(GRAY_700),
        Space::new().height(SPACING_SM),
        row![
            text(&post.location).size(12).color(GRAY_500),
            Space::new().width(Length::Fill),
            text(post.created_at.format("%b %d").to_string())
                .size(12)
                .color(GRAY_500),
        ],
    ];

    container(content)
        .width(Length::Fill)
        .padding(SPACING_MD)
        .style(card)
        .into()
}
