use ordered_float::OrderedFloat;

pub trait Magma {
    type Elem: Clone;

    fn add(&self, lhs: Self::Elem, rhs: Self::Elem) -> Self::Elem;
}

pub trait Associativity: Magma {}
pub trait Commutativity: Magma {}
pub trait Identity: Magma {
    /// Identity
    fn id(&self) -> Self::Elem;
}

pub trait Monoid: Magma + Associativity + Identity {}
impl<M: Magma + Associativity + Identity> Monoid for M {}

pub trait CommutativeMonoid: Monoid + Commutativity {}
impl<CM: Monoid + Commutativity> CommutativeMonoid for CM {}

/// `max` with `0` as identity. Only meaningful over non-negative values.
#[derive(Clone, Copy, Debug)]
pub struct NumMax<T>(std::marker::PhantomData<T>);

/// Max over non-negative floats.
pub type FloatMax = NumMax<OrderedFloat<f64>>;

impl<T> Default for NumMax<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> NumMax<T> {
    pub const fn new() -> Self {
        Self(std::marker::PhantomData)
    }
}

impl<T: num::Zero + Ord + Clone> Magma for NumMax<T> {
    type Elem = T;

    #[inline]
    fn add(&self, lhs: T, rhs: T) -> T {
        std::cmp::max(lhs, rhs)
    }
}
impl<T: num::Zero + Ord + Clone> Identity for NumMax<T> {
    #[inline]
    fn id(&self) -> T {
        T::zero()
    }
}
impl<T: num::Zero + Ord + Clone> Associativity for NumMax<T> {}
impl<T: num::Zero + Ord + Clone> Commutativity for NumMax<T> {}

#[derive(Clone, Copy, Debug)]
pub struct NumMin<T>(std::marker::PhantomData<T>);

impl<T> Default for NumMin<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> NumMin<T> {
    pub const fn new() -> Self {
        Self(std::marker::PhantomData)
    }
}

impl<T: num::Bounded + Ord + Clone> Magma for NumMin<T> {
    type Elem = T;

    #[inline]
    fn add(&self, lhs: T, rhs: T) -> T {
        std::cmp::min(lhs, rhs)
    }
}
impl<T: num::Bounded + Ord + Clone> Identity for NumMin<T> {
    #[inline]
    fn id(&self) -> T {
        T::max_value()
    }
}
impl<T: num::Bounded + Ord + Clone> Associativity for NumMin<T> {}
impl<T: num::Bounded + Ord + Clone> Commutativity for NumMin<T> {}

#[derive(Clone, Copy, Debug)]
pub struct NumAdditive<T>(std::marker::PhantomData<T>);

impl<T> Default for NumAdditive<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> NumAdditive<T> {
    pub const fn new() -> Self {
        Self(std::marker::PhantomData)
    }
}

impl<T: num::Num + Clone> Magma for NumAdditive<T> {
    type Elem = T;

    #[inline]
    fn add(&self, lhs: T, rhs: T) -> T {
        lhs + rhs
    }
}
impl<T: num::Num + Clone> Identity for NumAdditive<T> {
    #[inline]
    fn id(&self) -> T {
        T::zero()
    }
}
impl<T: num::Num + Clone> Associativity for NumAdditive<T> {}
impl<T: num::Num + Clone> Commutativity for NumAdditive<T> {}

/// A combine function and its identity, both given at construction.
///
/// The caller vouches for associativity, commutativity and
/// `f(x, identity) == x`; nothing here can check them.
#[derive(Clone, Copy, Debug)]
pub struct FnMonoid<T, F> {
    f: F,
    identity: T,
}

impl<T: Clone, F: Fn(T, T) -> T> FnMonoid<T, F> {
    #[inline]
    pub fn new(identity: T, f: F) -> Self {
        Self { f, identity }
    }
}

impl<T: Clone, F: Fn(T, T) -> T> Magma for FnMonoid<T, F> {
    type Elem = T;

    #[inline]
    fn add(&self, lhs: T, rhs: T) -> T {
        (self.f)(lhs, rhs)
    }
}
impl<T: Clone, F: Fn(T, T) -> T> Identity for FnMonoid<T, F> {
    #[inline]
    fn id(&self) -> T {
        self.identity.clone()
    }
}
impl<T: Clone, F: Fn(T, T) -> T> Associativity for FnMonoid<T, F> {}
impl<T: Clone, F: Fn(T, T) -> T> Commutativity for FnMonoid<T, F> {}
