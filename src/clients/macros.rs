/// Generate fire-and-forget intent methods with automatic tracing.
///
/// Unit variants take no arguments; struct variants take their fields as
/// parameters, in declaration order.
macro_rules! intent_method {
    ($client:ty => fn $method:ident() as $intent:ident::$variant:ident) => {
        #[allow(dead_code)]
        impl $client {
            #[tracing::instrument(skip(self))]
            pub async fn $method(&self) -> Result<(), $crate::shop_actor::ShopError> {
                self.send($intent::$variant).await
            }
        }
    };
    ($client:ty => fn $method:ident($($param:ident: $param_type:ty),+) as $intent:ident::$variant:ident) => {
        #[allow(dead_code)]
        impl $client {
            #[tracing::instrument(skip(self))]
            pub async fn $method(&self, $($param: $param_type),+) -> Result<(), $crate::shop_actor::ShopError> {
                self.send($intent::$variant { $($param,)+ }).await
            }
        }
    };
}
