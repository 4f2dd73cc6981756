//! Posts a fresh store starts with.

use postboard_core::Post;

/// The four starter posts, ids 1 to 4.
pub fn seed_posts() -> Vec<Post> {
    vec![
        Post {
            id: 1,
            title: "Car Spotting in Kileleshwa".to_string(),
            content: "Spent my weekend spotting the best rides in Kenya, and trust me, Nairobi doesn't disappoint!".to_string(),
            author: "Emily Carter".to_string(),
            image: "https://i.pinimg.com/736x/34/6b/25/346b25ab6c234c06d4969275588d57b9.jpg".to_string(),
        },
        Post {
            id: 2,
            title: "Where I Spent My Weekend".to_string(),
            content: "Villa Rosa Kempinski is one of the most lavish hotels in Nairobi, and the experience was pure luxury.".to_string(),
            author: "David Kim".to_string(),
            image: "https://i.pinimg.com/736x/80/4a/e3/804ae3ced8176a5831be6cb1672ea0dc.jpg".to_string(),
        },
        Post {
            id: 3,
            title: "A Weekend Guide to Nairobi, Kenya".to_string(),
            content: "From bustling markets to serene parks and delicious local cuisine, here's how to make the most of a weekend in Kenya's vibrant capital...".to_string(),
            author: "Grace Njoroge".to_string(),
            image: "https://i.pinimg.com/736x/74/ad/ad/74adadbb0a5e498ff06181fa8d5fd2e0.jpg".to_string(),
        },
        Post {
            id: 4,
            title: "Why Mindfulness Changed My Life".to_string(),
            content: "I used to rush through my days. Mindfulness helped me slow down, focus, and enjoy life more fully. Here's what I learned...".to_string(),
            author: "Liam Thompson".to_string(),
            image: "https://i.pinimg.com/736x/3c/0e/62/3c0e6216b6c062a7c1f7cda5201e67cc.jpg".to_string(),
        },
    ]
}
