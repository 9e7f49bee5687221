// Example: the page bootstrap. Three carousels mounted on their hosts at page-ready time.
use carousel::CarouselOptions;
use carousel_dom::{Control, Element, Node, Page};

fn host(label: &str, n: usize) -> Element<String> {
    let mut host = Element::new("div");
    for i in 1..=n {
        host.append_child(Node::Content(format!("{label} #{i}")));
    }
    host
}

fn main() {
    let mut page = Page::new(1280)
        .with_host("carrousel1", host("Article", 7))
        .with_host("carrousel2", host("Photo", 7))
        .with_host("carrousel3", host("Card", 7));

    let mounts = [
        (
            "carrousel1",
            CarouselOptions::new().with_slides_visible(3).with_loop(false),
        ),
        (
            "carrousel2",
            CarouselOptions::new()
                .with_slides_visible(3)
                .with_slides_to_scroll(2)
                .with_loop(true),
        ),
        (
            "carrousel3",
            CarouselOptions::new().with_slides_visible(4).with_loop(true),
        ),
    ];
    let ids: Vec<_> = mounts
        .into_iter()
        .filter_map(|(id, opts)| page.mount(id, opts))
        .collect();

    for &id in &ids {
        page.click(id, Control::Next);
        page.key_up(id, "ArrowRight");
        if let Some(w) = page.widget(id) {
            println!(
                "index={} visible={:?}",
                w.carousel().current_index(),
                w.visible_content()
            );
        }
    }

    println!("relaid out on resize: {}", page.resize(640));
    if let Some(w) = ids.first().and_then(|&id| page.widget(id)) {
        println!("{}", w.root().to_html());
    }
}
