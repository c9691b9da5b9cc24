//! Tactile button gallery.
//!
//! Builds the four stock icon button configurations, walks their resolved
//! styles and themes, and simulates press/release cycles the way a host
//! input layer would drive them.
//!
//! Run with: cargo run -p tactile --example button_gallery

use tactile::prelude::*;
use tactile_core::logging::format_object_forest;

fn describe(tag: &str, button: &IconButton) {
    let attrs = button.style_attributes();
    let theme = button.theme();

    println!("== {tag}");
    println!(
        "   row {}pt, side padding {}pt, font {}pt (weight {}), round rect: {}",
        attrs.row_height,
        attrs.side_padding,
        attrs.font.size(),
        attrs.font.weight().value(),
        attrs.is_round_rect,
    );
    println!("   arrangement: {:?}", button.arrangement());
    println!(
        "   surface {:?}, title {:?}, border {:?}",
        theme.normal.to_array(),
        theme.title.to_array(),
        theme.border.map(|c| c.to_array()),
    );
    let hint = button.size_hint();
    println!(
        "   size hint: {:.0}x{:.0}",
        hint.preferred.width, hint.preferred.height
    );
}

fn simulate_tap(tag: &str, button: &mut IconButton) {
    // Stand in for the layout engine: the inner control needs real bounds
    // before a release can count as "inside".
    let hint = button.size_hint();
    button
        .highlight_button_mut()
        .widget_base_mut()
        .resize(hint.preferred.width, hint.preferred.height);

    let surface = button.surface().clone();
    println!(
        "   {tag}: surface before press {:?}",
        surface.read().background_color().to_array()
    );

    let center = Point::new(hint.preferred.width / 2.0, hint.preferred.height / 2.0);
    let mut press = WidgetEvent::PointerPress(PointerPressEvent::primary(center));
    button.event(&mut press);
    println!(
        "   {tag}: surface while pressed {:?}",
        surface.read().background_color().to_array()
    );

    let mut release = WidgetEvent::PointerRelease(PointerReleaseEvent::primary(center));
    button.event(&mut release);
    println!(
        "   {tag}: surface after release {:?}",
        surface.read().background_color().to_array()
    );
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tactile=debug,tactile_core=info".into()),
        )
        .init();

    init_global_registry();

    let camera = Image::named("camera", Size::square(16.0));
    let mail = Image::named("mail", Size::square(16.0));

    let mut primary = IconButton::create(
        ButtonContent::new().with_text("Click"),
        ButtonStyle::Medium(WidthMode::WrapContent),
        ColorVariant::Primary,
    );
    let secondary = IconButton::create(
        ButtonContent::new()
            .with_text("Click")
            .with_left_image(camera.clone()),
        ButtonStyle::Large(WidthMode::WrapContent),
        ColorVariant::Secondary,
    );
    let bordered = IconButton::create(
        ButtonContent::new()
            .with_text("Click")
            .with_left_image(camera)
            .with_right_image(mail),
        ButtonStyle::Large(WidthMode::WrapContent),
        ColorVariant::PrimaryBorder,
    );
    let mut plain = IconButton::create(
        ButtonContent::new().with_text("Click"),
        ButtonStyle::Small(WidthMode::WrapContent),
        ColorVariant::Normal,
    );

    describe("medium / primary", &primary);
    describe("large / secondary + camera", &secondary);
    describe("large / primary border + camera + mail", &bordered);
    describe("small / normal", &plain);

    println!("\n-- tap feedback");
    primary.clicked().connect(|_| println!("   primary: clicked!"));
    simulate_tap("primary", &mut primary);

    println!("\n-- disabled look (still tappable)");
    plain.set_disabled_look(true);
    describe("small / normal, disabled look", &plain);
    simulate_tap("plain", &mut plain);
    plain.set_disabled_look(false);

    println!("\n-- object tree");
    match format_object_forest() {
        Ok(forest) => print!("{forest}"),
        Err(err) => eprintln!("could not dump object tree: {err}"),
    }
}
