// Example: page through six slides, three at a time, then shrink the viewport.
use carousel::{Carousel, CarouselOptions, Key};

fn main() {
    let opts = CarouselOptions::new().with_slides_visible(3).with_loop(true);
    let mut c = Carousel::new(6, opts, 1280);
    c.on_move(|i| println!("moved to {i}"));

    println!("layout={:?}", c.layout());
    while c.next() && c.current_index() != 0 {
        println!(
            "visible={:?} transform={}",
            c.visible_range(),
            c.transform().css()
        );
    }

    c.on_key_up(Key::from_name("ArrowLeft"));
    println!("after ArrowLeft: index={}", c.current_index());

    c.on_resize(600);
    println!(
        "mobile={} layout={:?} index={}",
        c.is_mobile(),
        c.layout(),
        c.current_index()
    );
}
