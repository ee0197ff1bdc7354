//! Scene graph
//!
//! Nodes own their children. Positions are local to the parent; absolute
//! positions are accumulated during traversal, so there are no parent
//! back-pointers to keep in sync.

mod plane;
mod sprite;
mod text;
mod tilemap;

pub use plane::*;
pub use sprite::*;
pub use text::*;
pub use tilemap::*;

use crate::screen::Screen;

/// What a node paints
pub enum NodeKind {
    /// Paints nothing; only positions its children
    Group,
    Plane(Plane),
    Sprite(Sprite),
    Text(Text),
    TileMap(TileMap),
}

pub struct SceneNode {
    pub name: String,
    pub x: i32,
    pub y: i32,
    pub width: usize,
    pub height: usize,
    pub visible: bool,
    pub kind: NodeKind,
    children: Vec<SceneNode>,
}

impl SceneNode {
    pub fn new(kind: NodeKind, width: usize, height: usize) -> Self {
        Self {
            name: String::new(),
            x: 0,
            y: 0,
            width,
            height,
            visible: true,
            kind,
            children: Vec::new(),
        }
    }

    pub fn group() -> Self {
        Self::new(NodeKind::Group, 0, 0)
    }

    /// Node sized to cover the whole tile map
    pub fn tile_map(map: TileMap) -> Self {
        let (w, h) = map.pixel_size();
        Self::new(NodeKind::TileMap(map), w, h)
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn at(mut self, x: i32, y: i32) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    /// Append a child; it is drawn after (on top of) earlier siblings
    pub fn add_child(&mut self, child: SceneNode) -> &mut SceneNode {
        self.children.push(child);
        let last = self.children.len() - 1;
        &mut self.children[last]
    }

    pub fn remove_child(&mut self, name: &str) -> Option<SceneNode> {
        let idx = self.children.iter().position(|c| c.name == name)?;
        Some(self.children.remove(idx))
    }

    pub fn children(&self) -> &[SceneNode] {
        &self.children
    }

    pub fn children_mut(&mut self) -> &mut [SceneNode] {
        &mut self.children
    }

    /// Depth-first search by name, including this node
    pub fn find(&self, name: &str) -> Option<&SceneNode> {
        if self.name == name {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find(name))
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut SceneNode> {
        if self.name == name {
            return Some(self);
        }
        self.children.iter_mut().find_map(|c| c.find_mut(name))
    }

    /// Absolute position of a named descendant, with this node at its own (x, y)
    pub fn absolute_position(&self, name: &str) -> Option<(i32, i32)> {
        self.absolute_position_from(name, 0, 0)
    }

    fn absolute_position_from(&self, name: &str, parent_x: i32, parent_y: i32) -> Option<(i32, i32)> {
        let (x, y) = (parent_x + self.x, parent_y + self.y);
        if self.name == name {
            return Some((x, y));
        }
        self.children
            .iter()
            .find_map(|c| c.absolute_position_from(name, x, y))
    }

    /// Paint this node and its subtree, parents before children
    pub fn draw(&self, screen: &mut dyn Screen) {
        self.draw_from(screen, 0, 0);
    }

    fn draw_from(&self, screen: &mut dyn Screen, parent_x: i32, parent_y: i32) {
        if !self.visible {
            return;
        }
        let (x, y) = (parent_x + self.x, parent_y + self.y);

        match &self.kind {
            NodeKind::Group => {}
            NodeKind::Plane(plane) => plane.draw(screen, x, y, self.width, self.height),
            NodeKind::Sprite(sprite) => sprite.draw(screen, x, y, self.width, self.height),
            NodeKind::Text(text) => text.draw(screen, x, y, self.width),
            NodeKind::TileMap(map) => map.draw(screen, x, y),
        }

        for child in &self.children {
            child.draw_from(screen, x, y);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rasterizer::{Color, Texture};
    use crate::screen::Canvas;
    use std::rc::Rc;

    fn plane(color: Color, w: usize, h: usize) -> SceneNode {
        SceneNode::new(NodeKind::Plane(Plane::new(color)), w, h)
    }

    #[test]
    fn test_children_offset_by_parent() {
        let mut root = SceneNode::group().at(10, 10);
        let panel = root.add_child(plane(Color::RED, 4, 4).with_name("panel").at(5, 0));
        panel.add_child(plane(Color::GREEN, 1, 1).with_name("dot").at(1, 2));

        assert_eq!(root.absolute_position("panel"), Some((15, 10)));
        assert_eq!(root.absolute_position("dot"), Some((16, 12)));
        assert_eq!(root.absolute_position("missing"), None);

        let mut canvas = Canvas::new(32, 32);
        root.draw(&mut canvas);
        assert_eq!(canvas.framebuffer.get_pixel(15, 10), Color::RED);
        assert_eq!(canvas.framebuffer.get_pixel(16, 12), Color::GREEN);
    }

    #[test]
    fn test_later_siblings_draw_on_top() {
        let mut root = SceneNode::group();
        root.add_child(plane(Color::RED, 4, 4));
        root.add_child(plane(Color::BLUE, 2, 2));
        let mut canvas = Canvas::new(4, 4);
        root.draw(&mut canvas);
        assert_eq!(canvas.framebuffer.get_pixel(0, 0), Color::BLUE);
        assert_eq!(canvas.framebuffer.get_pixel(3, 3), Color::RED);
    }

    #[test]
    fn test_hidden_subtree_skipped() {
        let mut root = SceneNode::group();
        let hidden = root.add_child(plane(Color::RED, 4, 4).with_name("hidden"));
        hidden.add_child(plane(Color::GREEN, 4, 4));
        root.find_mut("hidden").unwrap().visible = false;

        let mut canvas = Canvas::new(4, 4);
        root.draw(&mut canvas);
        assert!(canvas.pixels().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_sprite_frame_selection() {
        let mut sheet = Texture::new(4, 2);
        sheet.pixels[2] = Color::RED;
        let mut sprite = Sprite::new(Rc::new(sheet), 0, 0);
        sprite.set_source_x(2);
        let node = SceneNode::new(NodeKind::Sprite(sprite), 2, 2).at(1, 1);

        let mut canvas = Canvas::new(4, 4);
        node.draw(&mut canvas);
        assert_eq!(canvas.framebuffer.get_pixel(1, 1), Color::RED);
        assert_eq!(canvas.framebuffer.get_pixel(2, 1), Color::WHITE);
    }

    #[test]
    fn test_remove_child() {
        let mut root = SceneNode::group();
        root.add_child(SceneNode::group().with_name("a"));
        root.add_child(SceneNode::group().with_name("b"));
        assert!(root.remove_child("a").is_some());
        assert!(root.remove_child("a").is_none());
        assert_eq!(root.children().len(), 1);
        assert!(root.find("b").is_some());
    }
}
