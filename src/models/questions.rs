// Copyright (c) 2025, ImageMuse contributors
// SPDX-License-Identifier: BSD-3-Clause

//! The fixed question catalog used to seed bubble text on image load.

/// Template questions, one bubble each. Read-only; users edit the bubble
/// copies, never the catalog.
pub const QUESTION_CATALOG: &[&str] = &[
    "What software or tools were used to create this image?",
    "What skills do I need to learn to create an image like this?",
    "What are the basic steps involved in creating an image like this?",
    "How do I choose the right colors and textures for my image?",
    "What is the role of layers in image creation, and how do I use them?",
    "How do I import and manipulate images or elements from other sources?",
    "What are the best practices for selecting fonts and adding text to images?",
    "How do I add special effects, like shadows, gradients, or filters, to enhance the image?",
    "How do I save and export the image in the correct format and resolution?",
    "How do I ensure that my image looks good on different devices or platforms?",
    "What are some common mistakes to avoid when creating images like this?",
    "Where can I find tutorials, resources, or communities to help me improve my skills?",
];
