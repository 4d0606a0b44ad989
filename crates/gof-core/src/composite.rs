//! Composite: leaves and containers answer the same question.
//!
//! A [`ShippingBox`] owns its children, so the containment structure is a
//! finite tree and a box can never end up inside itself.

/// The operation common to every node.
pub trait Component {
    fn price(&self) -> f64;

    /// Tree access for clients that hold a component without knowing its kind.
    fn as_composite(&self) -> Option<&dyn Composite> {
        None
    }
}

/// Tree operations, only on containers.
pub trait Composite: Component {
    fn add(&mut self, child: Box<dyn Component>);
    fn children(&self) -> &[Box<dyn Component>];
}

/// A leaf with a fixed price.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Product {
    price: f64,
}

impl Product {
    pub fn new(price: f64) -> Self {
        Self { price }
    }
}

impl Component for Product {
    fn price(&self) -> f64 {
        self.price
    }
}

/// A container whose price is the sum of whatever it holds.
#[derive(Default)]
pub struct ShippingBox {
    children: Vec<Box<dyn Component>>,
}

impl ShippingBox {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_children(children: Vec<Box<dyn Component>>) -> Self {
        Self { children }
    }
}

impl Component for ShippingBox {
    fn price(&self) -> f64 {
        self.children.iter().map(|c| c.price()).sum()
    }

    fn as_composite(&self) -> Option<&dyn Composite> {
        Some(self)
    }
}

impl Composite for ShippingBox {
    fn add(&mut self, child: Box<dyn Component>) {
        self.children.push(child);
    }

    fn children(&self) -> &[Box<dyn Component>] {
        &self.children
    }
}

/// Number of leaves reachable from `component`, counting itself if it is one.
pub fn count_leaves(component: &dyn Component) -> usize {
    match component.as_composite() {
        Some(composite) => composite
            .children()
            .iter()
            .map(|c| count_leaves(c.as_ref()))
            .sum(),
        None => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn objects_from_db() -> Vec<Box<dyn Component>> {
        let boxed = ShippingBox::with_children(vec![
            Box::new(Product::new(30.0)),
            Box::new(Product::new(40.0)),
        ]);
        vec![
            Box::new(Product::new(10.0)),
            Box::new(Product::new(20.0)),
            Box::new(boxed),
        ]
    }

    #[test]
    fn client_does_not_care_what_it_holds() {
        let objects = objects_from_db();
        assert_eq!(objects[0].price(), 10.0);
        assert_eq!(objects[1].price(), 20.0);
        assert_eq!(objects[2].price(), 70.0);
    }

    #[test]
    fn empty_box_is_free() {
        assert_eq!(ShippingBox::new().price(), 0.0);
    }

    #[test]
    fn grouping_does_not_change_the_sum() {
        let flat = ShippingBox::with_children(vec![
            Box::new(Product::new(1.0)),
            Box::new(Product::new(2.0)),
            Box::new(Product::new(4.0)),
        ]);

        let mut inner = ShippingBox::new();
        inner.add(Box::new(Product::new(2.0)));
        inner.add(Box::new(Product::new(4.0)));
        let mut nested = ShippingBox::new();
        nested.add(Box::new(Product::new(1.0)));
        nested.add(Box::new(inner));

        assert_eq!(flat.price(), nested.price());
        assert_eq!(nested.children().len(), 2);
    }

    #[test]
    fn leaves_have_no_children() {
        assert!(Product::new(5.0).as_composite().is_none());
        let objects = objects_from_db();
        let total: usize = objects.iter().map(|o| count_leaves(o.as_ref())).sum();
        assert_eq!(total, 4);
    }
}
