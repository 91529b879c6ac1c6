use iced::widget::{button, column, image, scrollable, text, Column};
use iced::{Element, Length, Pixels};
use iced_aw::Wrap;

use crate::app::Message;
use crate::source::thumbnail::ImageResolver;
use crate::view::{Card, GridView};

/// Width of a card, thumbnail included
const CARD_WIDTH: f32 = 240.0;
const THUMBNAIL_HEIGHT: f32 = 180.0;

/// Card grid wrapped to the window width, with the notice on top
pub fn grid<'a>(view: GridView, images: &ImageResolver) -> Element<'a, Message> {
    let cards: Vec<Element<'a, Message>> = view
        .cards
        .into_iter()
        .map(|c| card(c, images))
        .collect();

    let mut content: Column<'a, Message> = Column::new().spacing(16);
    if let Some(notice) = view.notice {
        content = content.push(text(notice.message()).size(18));
    }
    content = content.push(
        Wrap::with_elements(cards)
            .spacing(Pixels(16.0))
            .line_spacing(Pixels(16.0)),
    );

    scrollable(content).height(Length::Fill).into()
}

fn card<'a>(card: Card, images: &ImageResolver) -> Element<'a, Message> {
    let thumbnail = image(image::Handle::from_path(images.lookup(&card.thumbnail)))
        .width(Length::Fixed(CARD_WIDTH))
        .height(Length::Fixed(THUMBNAIL_HEIGHT));

    let summary = column![
        thumbnail,
        text(card.category).size(12),
        text(card.model).size(20),
        text(card.id).size(12),
        text(format!("Capacity: {}", card.capacity)).size(14),
        text(format!("Weight: {}", card.weight)).size(14),
    ]
    .spacing(6)
    .width(Length::Fixed(CARD_WIDTH));

    button(summary)
        .padding(12)
        .style(button::secondary)
        .on_press(Message::ProductSelected(card.target))
        .into()
}
