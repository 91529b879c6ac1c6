use iced::widget::{button, column, image, row, scrollable, text, Column, Row};
use iced::{Element, Length, Pixels};
use iced_aw::Wrap;

use crate::app::Message;
use crate::source::thumbnail::ImageResolver;
use crate::view::{DetailAction, DetailView};

const GALLERY_IMAGE_WIDTH: f32 = 360.0;

/// Product screen: back button, gallery, specifications, features, actions
pub fn detail<'a>(view: DetailView, images: &ImageResolver) -> Element<'a, Message> {
    let back = button("← Back").padding(8).on_press(Message::Back);

    let gallery: Vec<Element<'a, Message>> = view
        .gallery
        .iter()
        .map(|reference| {
            image(image::Handle::from_path(images.lookup(reference)))
                .width(Length::Fixed(GALLERY_IMAGE_WIDTH))
                .into()
        })
        .collect();

    let specifications: Column<'a, Message> = view.specifications.into_iter().fold(
        Column::new()
            .spacing(6)
            .push(text("Technical Specifications").size(22)),
        |table, spec| {
            table.push(
                row![
                    text(spec.label).width(Length::FillPortion(1)),
                    text(spec.value).width(Length::FillPortion(2)),
                ]
                .spacing(12),
            )
        },
    );

    let features: Column<'a, Message> = view.features.into_iter().fold(
        Column::new().spacing(4).push(text("Features").size(22)),
        |list, feature| list.push(text(format!("• {feature}"))),
    );

    let actions: Row<'a, Message> = Row::with_children(view.actions.into_iter().map(|action| {
        let label = action.label();
        let message = match action {
            DetailAction::Share(id) => Message::Share(id),
            DetailAction::Export(id) => Message::Export(id),
        };
        button(label).padding(10).on_press(message).into()
    }))
    .spacing(12);

    let content = column![
        back,
        text(view.model).size(32),
        text(view.id).size(14),
        Wrap::with_elements(gallery).spacing(Pixels(12.0)).line_spacing(Pixels(12.0)),
        specifications,
        features,
        actions,
    ]
    .spacing(20);

    scrollable(content).height(Length::Fill).into()
}
