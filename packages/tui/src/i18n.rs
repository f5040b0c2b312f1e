//! Display-string localization
//!
//! A two-letter language code selects the catalog; unknown codes fall back
//! to English. The selection is persisted through the session store and only
//! affects display strings, never data or protocol.

/// Supported UI languages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Locale {
    En,
    Es,
}

impl Locale {
    /// Parse a two-letter code, falling back to English for unknown codes
    pub fn from_code(code: &str) -> Self {
        match code {
            "es" => Locale::Es,
            _ => Locale::En,
        }
    }

    /// The two-letter code for this locale
    pub fn code(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Es => "es",
        }
    }

    /// Cycle to the next shipped locale
    pub fn next(&self) -> Self {
        match self {
            Locale::En => Locale::Es,
            Locale::Es => Locale::En,
        }
    }

    /// Resolve a display string by key
    ///
    /// Unknown keys render as the key itself, which keeps a missing entry
    /// visible instead of panicking mid-frame.
    pub fn text(&self, key: &str) -> &'static str {
        match self {
            Locale::En => en(key),
            Locale::Es => es(key),
        }
    }

    /// Resolve a string with a single `{}` placeholder
    pub fn text_with(&self, key: &str, value: &str) -> String {
        self.text(key).replacen("{}", value, 1)
    }
}

fn en(key: &str) -> &'static str {
    match key {
        // General chrome
        "sign-in" => "Sign In",
        "login" => "Login",
        "login-failed" => "Login failed",
        "error-server" => "Error connecting to server",
        "loading" => "Loading...",
        "cancel" => "Cancel",
        "update" => "Update",
        "create" => "Create",
        "edit" => "Edit",
        "delete" => "Delete",
        "actions" => "Actions",
        "previous" => "Previous",
        "next" => "Next",
        "quit" => "Quit",
        "language" => "Language",
        "session-expired" => "Session expired, please sign in again",

        // Screens
        "users" => "Users",
        "products" => "Products",
        "categories" => "Product Categories",

        // Entity singular labels (toast interpolation)
        "user" => "User",
        "product" => "Product",

        // Field labels
        "first-name" => "First Name",
        "last-name" => "Last Name",
        "email" => "Email",
        "phone" => "Phone",
        "password" => "Password",
        "name" => "Name",
        "description" => "Description",
        "category" => "Category",

        // Form titles
        "create-user" => "Create User",
        "edit-user" => "Edit User",
        "create-product" => "Create Product",
        "edit-product" => "Edit Product",
        "create-category" => "Create Category",
        "edit-category" => "Edit Category",

        // Validation
        "field-required" => "This field is required",
        "email-invalid" => "Invalid email format",
        "phone-invalid" => "Invalid phone number",
        "password-min" => "Password must be at least 6 characters",

        // Outcomes
        "created" => "{} created successfully",
        "updated" => "{} updated successfully",
        "deleted" => "{} deleted successfully",
        "confirm-delete-title" => "Delete",
        "confirm-delete" => "Are you sure you want to delete {}?",
        "no-rows" => "Nothing to show.",

        _ => "",
    }
}

fn es(key: &str) -> &'static str {
    match key {
        "sign-in" => "Iniciar sesión",
        "login" => "Entrar",
        "login-failed" => "Error de inicio de sesión",
        "error-server" => "Error al conectar con el servidor",
        "loading" => "Cargando...",
        "cancel" => "Cancelar",
        "update" => "Actualizar",
        "create" => "Crear",
        "edit" => "Editar",
        "delete" => "Eliminar",
        "actions" => "Acciones",
        "previous" => "Anterior",
        "next" => "Siguiente",
        "quit" => "Salir",
        "language" => "Idioma",
        "session-expired" => "La sesión ha expirado, inicie sesión de nuevo",

        "users" => "Usuarios",
        "products" => "Productos",
        "categories" => "Categorías de productos",

        "user" => "Usuario",
        "product" => "Producto",

        "first-name" => "Nombre",
        "last-name" => "Apellido",
        "email" => "Correo electrónico",
        "phone" => "Teléfono",
        "password" => "Contraseña",
        "name" => "Nombre",
        "description" => "Descripción",
        "category" => "Categoría",

        "create-user" => "Crear usuario",
        "edit-user" => "Editar usuario",
        "create-product" => "Crear producto",
        "edit-product" => "Editar producto",
        "create-category" => "Crear categoría",
        "edit-category" => "Editar categoría",

        "field-required" => "Este campo es obligatorio",
        "email-invalid" => "Formato de correo inválido",
        "phone-invalid" => "Número de teléfono inválido",
        "password-min" => "La contraseña debe tener al menos 6 caracteres",

        "created" => "{} creado correctamente",
        "updated" => "{} actualizado correctamente",
        "deleted" => "{} eliminado correctamente",
        "confirm-delete-title" => "Eliminar",
        "confirm-delete" => "¿Seguro que desea eliminar {}?",
        "no-rows" => "No hay nada que mostrar.",

        _ => "",
    }
}
