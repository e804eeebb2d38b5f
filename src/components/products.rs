use yew::prelude::*;

struct ProductCard {
    image: &'static str,
    name: &'static str,
    note: &'static str,
}

const PRODUCTS: [ProductCard; 2] = [
    ProductCard {
        image: "https://res.cloudinary.com/dzgfkhpl1/image/upload/v1757494815/2kahni_oqcbm1.jpg",
        name: "Gold Dust & Cracked Perfumes",
        note: "One of the most defining fragrance notes of Gold Dust is cinnamon.",
    },
    ProductCard {
        image: "https://res.cloudinary.com/dzgfkhpl1/image/upload/v1757494814/1kahni_k1pd4f.jpg",
        name: "Women's Fragrances Perfumes",
        note: "Women's fragrances – 100ml",
    },
];

#[function_component(Products)]
pub fn products() -> Html {
    html! {
        <section id="collection" class="products-section">
            <div class="container">
                <div class="product-grid">
                    { for PRODUCTS.iter().map(|card| html! {
                        <div class="product-card">
                            <div class="product-frame">
                                <img src={card.image} alt={card.name} />
                            </div>
                            <h3 class="product-name">{ card.name }</h3>
                            <p class="product-note">{ card.note }</p>
                            <a href="#" class="product-cta link-underline">{"Call Now"}</a>
                        </div>
                    }) }
                </div>
            </div>
            <style>
                {r#"
                    .products-section {
                        padding: 5rem 0;
                        background: var(--brand-beige);
                        scroll-margin-top: 5rem;
                    }
                    .product-grid {
                        display: grid;
                        gap: 3rem;
                        padding: 0 1rem;
                    }
                    .product-card {
                        text-align: center;
                    }
                    .product-frame {
                        aspect-ratio: 1 / 1;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        overflow: hidden;
                    }
                    .product-frame img {
                        max-height: 100%;
                        width: auto;
                        object-fit: contain;
                        transition: transform 0.5s ease-in-out;
                    }
                    .product-card:hover .product-frame img {
                        transform: scale(1.05);
                    }
                    .product-name {
                        font-family: 'Cormorant Garamond', serif;
                        font-size: 1.875rem;
                        font-weight: 400;
                        margin: 1.5rem 0 0;
                        color: var(--brand-dark);
                    }
                    .product-note {
                        margin: 0.5rem 0 0;
                        color: #4b5563;
                        font-size: 0.875rem;
                    }
                    .product-cta {
                        margin-top: 1rem;
                        display: inline-block;
                        font-size: 0.875rem;
                        letter-spacing: 0.1em;
                        text-transform: uppercase;
                        font-weight: 600;
                        color: var(--brand-dark);
                        text-decoration: none;
                    }
                    @media (min-width: 768px) {
                        .products-section {
                            padding: 8rem 0;
                        }
                        .product-grid {
                            grid-template-columns: 1fr 1fr;
                            gap: 5rem;
                            align-items: start;
                        }
                        .product-note {
                            font-size: 1rem;
                        }
                    }
                "#}
            </style>
        </section>
    }
}
