//! Bottom navigation bar component.

use iced::widget::{button, container, row, text};
use iced::{Element, Length};

use crate::message::Message;
use crate::state::Screen;
use crate::theme::{AFYA_GREEN, GRAY_500, SPACING_XS, bar, button_ghost};

/// Creates the bottom navigation bar.
///
/// One button per screen, with the active screen highlighted in the brand
/// green.
pub fn nav_bar<'a>(active: Screen) -> Element<'a, Message> {
    let mut items = row![].spacing(SPACING_XS);

    for screen in Screen::ALL {
        let color = if screen == active { AFYA_GREEN } else { GRAY_500 };
        items = items.push(
            button(container(text(screen.label()).size(13).color(color)).center_x(Length::Fill))
                .on_press(Message::Navigate(screen))
                .padding([10.0, 4.0])
                .width(Length::Fill)
                .style(button_ghost),
        );
    }

    container(items).width(Length::Fill).style(bar).into()
}
