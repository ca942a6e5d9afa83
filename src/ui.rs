use crate::app::colours;
use crate::board::{Collected, Ingredient};
use crate::game::LogMessage;
use chargrid::{
    render::{ColModify, Frame, Style, View, ViewContext},
    text::{RichTextPartOwned, RichTextViewSingleLine, StringViewSingleLine},
};
use coord_2d::Coord;
use rgb24::Rgb24;

const UNCOLLECTED_COLOUR: Rgb24 = Rgb24::new_grey(63);
const INGREDIENTS: [Ingredient; 3] = [
    Ingredient::PeanutButter,
    Ingredient::Jelly,
    Ingredient::Bread,
];

// One label per ingredient, lit up in its colour once collected
#[derive(Default)]
struct CollectedView {}

impl View<Collected> for CollectedView {
    fn view<F: Frame, C: ColModify>(
        &mut self,
        collected: Collected,
        context: ViewContext<C>,
        frame: &mut F,
    ) {
        let mut offset = 0;
        for &ingredient in INGREDIENTS.iter() {
            let has = collected.contains(ingredient);
            let foreground = if has {
                colours::ingredient_colour(ingredient)
            } else {
                UNCOLLECTED_COLOUR
            };
            let mut view = StringViewSingleLine::new(
                Style::new().with_foreground(foreground).with_bold(has),
            );
            view.view(
                ingredient.name(),
                context.add_offset(Coord::new(offset, 0)),
                frame,
            );
            offset += ingredient.name().len() as i32 + 2;
        }
    }
}

struct MessagesView {
    buf: Vec<RichTextPartOwned>,
}

impl Default for MessagesView {
    fn default() -> Self {
        let common = RichTextPartOwned::new(String::new(), Style::new());
        Self {
            buf: vec![common.clone(), common.clone(), common],
        }
    }
}

impl<'a> View<&'a [LogMessage]> for MessagesView {
    fn view<F: Frame, C: ColModify>(
        &mut self,
        messages: &'a [LogMessage],
        context: ViewContext<C>,
        frame: &mut F,
    ) {
        fn format_message(buf: &mut [RichTextPartOwned], message: LogMessage) {
            use std::fmt::Write;
            use LogMessage::*;
            buf[0].text.clear();
            buf[1].text.clear();
            buf[2].text.clear();
            buf[0].style.foreground = Some(Rgb24::new_grey(255));
            buf[1].style.bold = Some(true);
            buf[2].style.foreground = Some(Rgb24::new_grey(255));
            match message {
                ChefCollects(ingredient) => {
                    write!(&mut buf[0].text, "You grab the ").unwrap();
                    write!(&mut buf[1].text, "{}", ingredient.name()).unwrap();
                    buf[1].style.foreground = Some(colours::ingredient_colour(ingredient));
                    write!(&mut buf[2].text, ".").unwrap();
                }
                AllIngredientsCollected => {
                    write!(&mut buf[0].text, "All ingredients! Head for the ").unwrap();
                    write!(&mut buf[1].text, "plate").unwrap();
                    buf[1].style.foreground = Some(colours::GOAL);
                    write!(&mut buf[2].text, ".").unwrap();
                }
                GoalStillLocked => {
                    write!(&mut buf[0].text, "The sandwich isn't ready yet.").unwrap();
                }
                RoundWon => {
                    write!(&mut buf[0].text, "Sandwich ").unwrap();
                    write!(&mut buf[1].text, "delivered").unwrap();
                    buf[1].style.foreground = Some(colours::GOAL);
                    write!(&mut buf[2].text, "! A fresh round begins.").unwrap();
                }
            }
        }
        const NUM_MESSAGES: usize = 4;
        let start_index = messages.len().saturating_sub(NUM_MESSAGES);
        for (i, &message) in (&messages[start_index..]).iter().enumerate() {
            format_message(&mut self.buf, message);
            let offset = Coord::new(0, i as i32);
            RichTextViewSingleLine.view(
                self.buf.iter().map(|part| part.as_rich_text_part()),
                context.add_offset(offset),
                frame,
            );
        }
    }
}

#[derive(Default)]
struct RoundsWonView {
    buf: String,
}

impl View<u32> for RoundsWonView {
    fn view<F: Frame, C: ColModify>(
        &mut self,
        rounds_won: u32,
        context: ViewContext<C>,
        frame: &mut F,
    ) {
        use std::fmt::Write;
        self.buf.clear();
        write!(&mut self.buf, "Sandwiches delivered: {}", rounds_won).unwrap();
        StringViewSingleLine::new(Style::new().with_foreground(Rgb24::new_grey(187))).view(
            &self.buf,
            context,
            frame,
        );
    }
}

pub struct UiData<'a> {
    pub collected: Collected,
    pub rounds_won: u32,
    pub messages: &'a [LogMessage],
}

#[derive(Default)]
pub struct UiView {
    collected_view: CollectedView,
    rounds_won_view: RoundsWonView,
    messages_view: MessagesView,
}

impl<'a> View<UiData<'a>> for UiView {
    fn view<F: Frame, C: ColModify>(
        &mut self,
        data: UiData,
        context: ViewContext<C>,
        frame: &mut F,
    ) {
        self.collected_view.view(data.collected, context, frame);
        self.rounds_won_view
            .view(data.rounds_won, context.add_offset(Coord::new(0, 1)), frame);
        self.messages_view
            .view(data.messages, context.add_offset(Coord::new(0, 3)), frame);
    }
}
