// SPDX-License-Identifier: MPL-2.0
//! Rendering of the catalog page and its dialogs.

use super::form::{BuyerFields, CustomGiftForm, Dialog, PurchaseForm};
use super::messages::{Field, Message};
use super::{State, ViewContext};
use crate::config::PaymentConfig;
use crate::domain::gift::{self, Gift, PriceTier};
use crate::ui::design_tokens::{opacity, palette, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use crate::ui::widgets::Spinner;
use iced::widget::{
    button, center, mouse_area, opaque, rule, scrollable, text, text_input, Column, Container,
    Row, Space, Stack, Svg, Text,
};
use iced::{alignment, font, Color, Element, Font, Length};

const BOLD: Font = Font {
    weight: font::Weight::Bold,
    ..Font::DEFAULT
};

const ON_BRAND_MUTED: Color = Color {
    a: opacity::ON_BRAND_MUTED,
    ..palette::WHITE
};

pub(super) fn render<'a>(state: &'a State, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let page = page(state, ctx);

    match state.dialog() {
        Some(dialog) => modal(page, dialog_card(dialog, ctx)),
        None => page,
    }
}

// =============================================================================
// Page
// =============================================================================

fn page<'a>(state: &'a State, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let body = if state.is_loading() {
        loading(state.spinner_rotation(), ctx)
    } else {
        columns(state.gifts(), ctx)
    };

    let content = Column::new()
        .spacing(spacing::XXL)
        .padding(spacing::XL)
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .push(header(ctx))
        .push(body)
        .push(payment_panel(state.payment(), ctx));

    Container::new(scrollable(
        Container::new(content).center_x(Length::Fill),
    ))
    .width(Length::Fill)
    .height(Length::Fill)
    .style(styles::container::page)
    .into()
}

fn header<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let title = Text::new(ctx.i18n.tr("catalog-title"))
        .size(typography::DISPLAY)
        .font(BOLD)
        .color(palette::WHITE);
    let subtitle = Text::new(ctx.i18n.tr("catalog-subtitle"))
        .size(typography::BODY_LG)
        .color(ON_BRAND_MUTED);

    let custom_gift = button(icon_label(
        icons::plus(),
        ctx.i18n.tr("custom-gift-open"),
        palette::WHITE,
    ))
    .padding([spacing::XS, spacing::MD])
    .style(styles::button::on_brand)
    .on_press(Message::OpenCustomGift);

    let refresh = button(Text::new(ctx.i18n.tr("catalog-refresh")).size(typography::BODY))
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::on_brand)
        .on_press(Message::Refresh);

    Column::new()
        .spacing(spacing::SM)
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .push(title)
        .push(subtitle)
        .push(Row::new().spacing(spacing::SM).push(custom_gift).push(refresh))
        .into()
}

fn loading<'a>(rotation: f32, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let content = Column::new()
        .spacing(spacing::MD)
        .align_x(alignment::Horizontal::Center)
        .push(Spinner::new(palette::WHITE, rotation).view())
        .push(
            Text::new(ctx.i18n.tr("catalog-loading"))
                .size(typography::TITLE_MD)
                .color(ON_BRAND_MUTED),
        );

    Container::new(content)
        .center_x(Length::Fill)
        .padding(spacing::XXL)
        .into()
}

fn columns<'a>(gifts: &'a [Gift], ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let (highlights, keepsakes) = gift::split_by_tier(gifts);

    Row::new()
        .spacing(spacing::XL)
        .push(tier_column(
            PriceTier::Highlight,
            ctx.i18n.tr("catalog-highlights"),
            &highlights,
            ctx,
        ))
        .push(tier_column(
            PriceTier::Keepsake,
            ctx.i18n.tr("catalog-keepsakes"),
            &keepsakes,
            ctx,
        ))
        .into()
}

fn tier_column<'a>(
    tier: PriceTier,
    title: String,
    gifts: &[&'a Gift],
    ctx: &ViewContext<'a>,
) -> Element<'a, Message> {
    let icon = match tier {
        PriceTier::Highlight => icons::sparkles(),
        PriceTier::Keepsake => icons::gift(),
    };
    let heading = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(icons::sized(
            icons::tinted(icon, styles::container::tier_color(tier)),
            sizing::ICON_LG,
        ))
        .push(
            Text::new(title)
                .size(typography::TITLE_LG)
                .font(BOLD)
                .color(palette::WHITE),
        );

    let mut column = Column::new()
        .spacing(spacing::LG)
        .width(Length::FillPortion(1))
        .push(heading)
        .push(rule::horizontal(1));

    if gifts.is_empty() {
        column = column.push(
            Container::new(
                Text::new(ctx.i18n.tr("catalog-empty-column"))
                    .size(typography::BODY)
                    .color(ON_BRAND_MUTED),
            )
            .center_x(Length::Fill)
            .padding(spacing::MD)
            .style(styles::container::on_brand),
        );
    }

    for gift in gifts {
        column = column.push(gift_card(gift, ctx));
    }

    column.into()
}

// =============================================================================
// Gift card
// =============================================================================

fn gift_card<'a>(gift: &'a Gift, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let tier = gift.tier();
    let available = gift.is_available();

    let status: Element<'a, Message> = if available {
        button(Space::new())
            .width(Length::Fixed(sizing::CHECKBOX))
            .height(Length::Fixed(sizing::CHECKBOX))
            .padding(0)
            .style(styles::button::checkbox)
            .on_press(Message::OpenPurchase(gift.id()))
            .into()
    } else {
        Container::new(icon_label(
            icons::checkmark(),
            ctx.i18n.tr("gift-purchased-badge"),
            palette::SUCCESS_800,
        ))
        .padding([spacing::XXS, spacing::XS])
        .style(styles::container::purchased_badge)
        .into()
    };

    let price = Text::new(gift.price().to_string())
        .size(typography::BODY)
        .font(BOLD)
        .color(price_color(tier));

    let details = Column::new()
        .spacing(spacing::XXS)
        .width(Length::Fill)
        .push(gift_name(gift.name(), available))
        .push(price);

    let mut content = Row::new()
        .spacing(spacing::MD)
        .align_y(alignment::Vertical::Center)
        .push(status)
        .push(details);

    if available {
        if gift.link().is_some() {
            content = content.push(
                button(Text::new(ctx.i18n.tr("gift-view-in-store")).size(typography::BODY_SM))
                    .padding([spacing::XS, spacing::MD])
                    .style(styles::button::link)
                    .on_press(Message::CopyLink(gift.id())),
            );
        }
    } else {
        content = content.push(
            button(Text::new(ctx.i18n.tr("gift-unavailable")).size(typography::BODY_SM))
                .padding([spacing::XS, spacing::MD])
                .style(styles::button::link),
        );
    }

    let stripe = Container::new(Space::new())
        .width(Length::Fixed(sizing::TIER_STRIPE))
        .height(Length::Fill)
        .style(styles::container::tier_stripe(tier));

    Container::new(
        Row::new()
            .spacing(spacing::MD)
            .push(stripe)
            .push(Container::new(content).padding([spacing::MD, 0.0])),
    )
    .padding([0.0, spacing::MD])
    .width(Length::Fill)
    .style(styles::container::card(available))
    .into()
}

/// Purchased gifts are grayed out and struck through.
fn gift_name<'a>(name: &'a str, available: bool) -> Element<'a, Message> {
    let label = Text::new(name).size(typography::TITLE_MD).font(BOLD);

    if available {
        return label.into();
    }

    Stack::new()
        .push(label.color(palette::GRAY_500))
        .push(Container::new(rule::horizontal(1)).center_y(Length::Fill))
        .into()
}

fn price_color(tier: PriceTier) -> Color {
    match tier {
        PriceTier::Highlight => palette::GOLD_600,
        PriceTier::Keepsake => palette::SILVER_600,
    }
}

// =============================================================================
// Payment panel
// =============================================================================

fn payment_panel<'a>(payment: &'a PaymentConfig, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let title = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(icons::sized(
            icons::tinted(icons::cash(), palette::WHITE),
            sizing::ICON_LG,
        ))
        .push(
            Text::new(ctx.i18n.tr("payment-title"))
                .size(typography::TITLE_LG)
                .font(BOLD),
        );

    let mut content = Column::new().spacing(spacing::SM).push(title);

    let Some(pix_key) = configured(payment.pix_key.as_deref()) else {
        content = content.push(
            Text::new(ctx.i18n.tr("payment-unconfigured"))
                .size(typography::BODY)
                .color(ON_BRAND_MUTED),
        );
        return panel_container(content);
    };

    content = content
        .push(
            Text::new(ctx.i18n.tr("payment-description"))
                .size(typography::BODY)
                .color(ON_BRAND_MUTED),
        )
        .push(detail_row(ctx.i18n.tr("payment-pix-key"), pix_key));

    if let Some(holder) = configured(payment.holder_name.as_deref()) {
        content = content.push(detail_row(ctx.i18n.tr("payment-holder"), holder));
    }
    if let Some(bank) = configured(payment.bank.as_deref()) {
        content = content.push(detail_row(ctx.i18n.tr("payment-bank"), bank));
    }

    content = content.push(
        button(icon_label(
            icons::duplicate(),
            ctx.i18n.tr("payment-copy-key"),
            palette::WHITE,
        ))
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::on_brand)
        .on_press(Message::CopyPixKey),
    );

    panel_container(content)
}

fn panel_container<'a>(content: Column<'a, Message>) -> Element<'a, Message> {
    Container::new(content)
        .width(Length::Fill)
        .padding(spacing::LG)
        .style(styles::container::on_brand)
        .into()
}

fn detail_row<'a>(label: String, value: &'a str) -> Element<'a, Message> {
    Row::new()
        .spacing(spacing::XS)
        .push(
            Text::new(format!("{label}:"))
                .size(typography::BODY)
                .color(ON_BRAND_MUTED),
        )
        .push(text(value).size(typography::BODY).font(BOLD))
        .into()
}

/// Blank config values count as unset.
pub(super) fn configured(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

// =============================================================================
// Dialogs
// =============================================================================

fn modal<'a>(base: Element<'a, Message>, content: Element<'a, Message>) -> Element<'a, Message> {
    let backdrop = mouse_area(
        center(opaque(content))
            .padding(spacing::MD)
            .style(styles::container::backdrop),
    )
    .on_press(Message::CloseDialog);

    Stack::new().push(base).push(opaque(backdrop)).into()
}

fn dialog_card<'a>(dialog: &'a Dialog, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let body = match dialog {
        Dialog::Purchase(form) => purchase_dialog(form, ctx),
        Dialog::CustomGift(form) => custom_gift_dialog(form, ctx),
    };

    // Thin brand stripe along the top edge.
    let stripe = Container::new(Space::new())
        .width(Length::Fill)
        .height(Length::Fixed(spacing::XXS))
        .style(styles::container::page);

    Container::new(
        Column::new()
            .push(stripe)
            .push(Container::new(body).padding(spacing::LG)),
    )
    .width(Length::Fixed(sizing::MODAL_WIDTH))
    .style(styles::container::panel)
    .into()
}

fn purchase_dialog<'a>(form: &'a PurchaseForm, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let prompt = ctx
        .i18n
        .tr_with_args("purchase-prompt", &[("gift", form.gift_name.as_str())]);

    let mut content = Column::new()
        .spacing(spacing::MD)
        .push(dialog_title(ctx.i18n.tr("purchase-title")))
        .push(Text::new(prompt).size(typography::BODY));

    content = push_buyer_fields(content, &form.buyer, form.saving, ctx);

    content
        .push(dialog_actions(
            form.saving,
            ctx.i18n.tr("purchase-confirm"),
            Message::SubmitPurchase,
            ctx,
        ))
        .into()
}

fn custom_gift_dialog<'a>(
    form: &'a CustomGiftForm,
    ctx: &ViewContext<'a>,
) -> Element<'a, Message> {
    let submit = Message::SubmitCustomGift;

    let mut content = Column::new()
        .spacing(spacing::MD)
        .push(dialog_title(ctx.i18n.tr("custom-gift-title")))
        .push(Text::new(ctx.i18n.tr("custom-gift-prompt")).size(typography::BODY))
        .push(labeled_input(
            ctx.i18n.tr("custom-gift-name-label"),
            ctx.i18n.tr("custom-gift-name-placeholder"),
            &form.name,
            Field::GiftName,
            (!form.saving).then(|| submit.clone()),
        ))
        .push(labeled_input(
            ctx.i18n.tr("custom-gift-price-label"),
            ctx.i18n.tr("custom-gift-price-placeholder"),
            &form.price,
            Field::GiftPrice,
            (!form.saving).then(|| submit.clone()),
        ));

    content = push_buyer_fields(content, &form.buyer, form.saving, ctx);

    content
        .push(dialog_actions(
            form.saving,
            ctx.i18n.tr("custom-gift-confirm"),
            submit,
            ctx,
        ))
        .into()
}

fn push_buyer_fields<'a>(
    content: Column<'a, Message>,
    buyer: &'a BuyerFields,
    saving: bool,
    ctx: &ViewContext<'a>,
) -> Column<'a, Message> {
    let fields = [
        ("form-name-label", "form-name-placeholder", &buyer.name, Field::BuyerName),
        ("form-phone-label", "form-phone-placeholder", &buyer.phone, Field::BuyerPhone),
        (
            "form-message-label",
            "form-message-placeholder",
            &buyer.message,
            Field::BuyerMessage,
        ),
    ];

    fields
        .into_iter()
        .fold(content, |content, (label, placeholder, value, field)| {
            content.push(if saving {
                disabled_input(ctx.i18n.tr(label), ctx.i18n.tr(placeholder), value)
            } else {
                labeled_input(
                    ctx.i18n.tr(label),
                    ctx.i18n.tr(placeholder),
                    value,
                    field,
                    None,
                )
            })
        })
}

fn labeled_input<'a>(
    label: String,
    placeholder: String,
    value: &'a str,
    field: Field,
    on_submit: Option<Message>,
) -> Element<'a, Message> {
    let mut input = text_input(&placeholder, value)
        .on_input(move |v| Message::FieldChanged(field, v))
        .padding(spacing::SM)
        .size(typography::BODY)
        .style(styles::text_input::field);
    if let Some(message) = on_submit {
        input = input.on_submit(message);
    }

    field_column(label, input.into())
}

/// Input without `on_input`, shown while a request is in flight.
fn disabled_input<'a>(label: String, placeholder: String, value: &'a str) -> Element<'a, Message> {
    let input = text_input(&placeholder, value)
        .padding(spacing::SM)
        .size(typography::BODY)
        .style(styles::text_input::field);

    field_column(label, input.into())
}

fn field_column<'a>(label: String, input: Element<'a, Message>) -> Element<'a, Message> {
    Column::new()
        .spacing(spacing::XXS)
        .push(
            Text::new(label.to_uppercase())
                .size(typography::CAPTION)
                .font(BOLD)
                .color(palette::GRAY_500),
        )
        .push(input)
        .into()
}

fn dialog_title<'a>(title: String) -> Element<'a, Message> {
    Text::new(title)
        .size(typography::TITLE_LG)
        .font(BOLD)
        .into()
}

fn dialog_actions<'a>(
    saving: bool,
    confirm_label: String,
    submit: Message,
    ctx: &ViewContext<'a>,
) -> Element<'a, Message> {
    let cancel = button(
        Text::new(ctx.i18n.tr("form-cancel"))
            .size(typography::BODY)
            .center(),
    )
    .width(Length::Fill)
    .height(Length::Fixed(sizing::BUTTON_HEIGHT))
    .padding(spacing::SM)
    .style(styles::button::secondary)
    .on_press_maybe((!saving).then_some(Message::CloseDialog));

    let label = if saving {
        ctx.i18n.tr("form-saving")
    } else {
        confirm_label
    };
    let confirm = button(
        Text::new(label)
            .size(typography::BODY)
            .font(BOLD)
            .center(),
    )
    .width(Length::Fill)
    .height(Length::Fixed(sizing::BUTTON_HEIGHT))
    .padding(spacing::SM)
    .style(styles::button::primary)
    .on_press_maybe((!saving).then_some(submit));

    Row::new()
        .spacing(spacing::SM)
        .push(cancel)
        .push(confirm)
        .into()
}

// =============================================================================
// Helpers
// =============================================================================

fn icon_label<'a>(icon: Svg<'static>, label: String, color: Color) -> Element<'a, Message> {
    Row::new()
        .spacing(spacing::XS)
        .align_y(alignment::Vertical::Center)
        .push(icons::sized(icons::tinted(icon, color), sizing::ICON_SM))
        .push(Text::new(label).size(typography::BODY_SM).color(color))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_config_values_are_unset() {
        assert_eq!(configured(None), None);
        assert_eq!(configured(Some("   ")), None);
        assert_eq!(configured(Some(" chave@pix.com ")), Some("chave@pix.com"));
    }

    #[test]
    fn price_colors_follow_tier() {
        assert_eq!(price_color(PriceTier::Highlight), palette::GOLD_600);
        assert_eq!(price_color(PriceTier::Keepsake), palette::SILVER_600);
    }
}
