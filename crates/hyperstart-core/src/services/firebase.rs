//! Firebase: SDK config, env keys, deploy rules and per-service hooks

use crate::answers::FirebaseService;
use crate::config::{merge_env_example, to_json, EnvSection};
use crate::error::Result;
use crate::project::{FileSink, Layout, Project};
use crate::runtime::{CommandRunner, Invocation};
use crate::templates::fill;
use crate::templates::ui::{self, hook_return, Imports, Ui, Variant};
use serde_json::json;
use std::collections::BTreeSet;

/// Keys every Firebase service needs
const COMMON_KEYS: &[(&str, &str)] = &[
    ("FIREBASE_API_KEY", "your-api-key"),
    ("FIREBASE_PROJECT_ID", "your-project-id"),
    ("FIREBASE_MESSAGING_SENDER_ID", "your-sender-id"),
    ("FIREBASE_APP_ID", "your-app-id"),
    ("FIREBASE_MEASUREMENT_ID", "your-measurement-id"),
];

/// Key a single service adds on top of the common ones
fn service_key(service: FirebaseService) -> (&'static str, &'static str) {
    match service {
        FirebaseService::Auth => ("FIREBASE_AUTH_DOMAIN", "your-project.firebaseapp.com"),
        FirebaseService::Database => ("FIREBASE_DATABASE_ID", "(default)"),
        FirebaseService::Storage => ("FIREBASE_STORAGE_BUCKET", "your-project.appspot.com"),
    }
}

/// Unprefixed env keys the selection needs, in file order
pub fn env_keys(services: &BTreeSet<FirebaseService>) -> Vec<(&'static str, &'static str)> {
    if services.is_empty() {
        return Vec::new();
    }
    let mut keys = COMMON_KEYS.to_vec();
    keys.extend(services.iter().map(|s| service_key(*s)));
    keys
}

pub async fn install<S: FileSink, R: CommandRunner>(
    project: &mut Project<S>,
    runner: &mut R,
    services: &BTreeSet<FirebaseService>,
    ui: &Ui,
) -> Result<()> {
    if services.is_empty() {
        return Ok(());
    }
    let layout = project.layout();

    runner
        .run(&Invocation::npm_install(["firebase"], false).in_dir(project.root()))
        .await?;

    project.write("src/lib/firebase.js", &firebase_config(layout, services))?;

    let section = env_keys(services).into_iter().fold(
        EnvSection::new("Firebase")
            .note("Firebase Console > Project Settings > General > Your apps"),
        |section, (key, placeholder)| section.var(layout.env_key(key), placeholder),
    );
    merge_env_example(project, &section)?;

    write_deploy_config(project, services)?;

    if services.contains(&FirebaseService::Auth) {
        project.write("src/hooks/useAuth.jsx", &auth_hook(layout))?;
        project.write("src/components/auth/LoginForm.jsx", &login_form(ui))?;
        project.write(
            "src/components/auth/ProtectedRoute.jsx",
            &format!("{}{}", layout.client_directive(), PROTECTED_ROUTE),
        )?;
    }

    if services.contains(&FirebaseService::Database) {
        project.write("src/hooks/useFirestore.js", &firestore_hook(layout))?;
        project.write("src/utils/firestoreUtils.js", FIRESTORE_UTILS)?;
    }

    if services.contains(&FirebaseService::Storage) {
        project.write("src/hooks/useStorage.js", &storage_hook(layout))?;
        project.write("src/utils/storageUtils.js", STORAGE_UTILS)?;
    }

    Ok(())
}

/// `src/lib/firebase.js`, listing only the config keys and exports the selection needs
pub fn firebase_config(layout: Layout, services: &BTreeSet<FirebaseService>) -> String {
    let auth = services.contains(&FirebaseService::Auth);
    let database = services.contains(&FirebaseService::Database);
    let storage = services.contains(&FirebaseService::Storage);

    let mut out = String::from("import { initializeApp } from 'firebase/app';\n");
    if auth {
        out.push_str("import { getAuth } from 'firebase/auth';\n");
    }
    if database {
        out.push_str("import { getFirestore } from 'firebase/firestore';\n");
    }
    if storage {
        out.push_str("import { getStorage } from 'firebase/storage';\n");
    }

    let mut fields = vec![("apiKey", "FIREBASE_API_KEY")];
    if auth {
        fields.push(("authDomain", "FIREBASE_AUTH_DOMAIN"));
    }
    fields.push(("projectId", "FIREBASE_PROJECT_ID"));
    if storage {
        fields.push(("storageBucket", "FIREBASE_STORAGE_BUCKET"));
    }
    fields.extend([
        ("messagingSenderId", "FIREBASE_MESSAGING_SENDER_ID"),
        ("appId", "FIREBASE_APP_ID"),
        ("measurementId", "FIREBASE_MEASUREMENT_ID"),
    ]);

    out.push_str("\nconst firebaseConfig = {\n");
    for (field, key) in fields {
        out.push_str(&format!("  {}: {},\n", field, layout.env_access(key)));
    }
    out.push_str("};\n\nconst app = initializeApp(firebaseConfig);\n\n");

    if auth {
        out.push_str("export const auth = getAuth(app);\n");
    }
    if database {
        out.push_str(&format!(
            "export const db = getFirestore(app, {} || '(default)');\n",
            layout.env_access("FIREBASE_DATABASE_ID")
        ));
    }
    if storage {
        out.push_str("export const storage = getStorage(app);\n");
    }
    out.push_str("\nexport default app;\n");
    out
}

fn write_deploy_config<S: FileSink>(
    project: &mut Project<S>,
    services: &BTreeSet<FirebaseService>,
) -> Result<()> {
    let layout = project.layout();
    let mut config = json!({
        "hosting": {
            "public": layout.build_output_dir(),
            "ignore": ["firebase.json", "**/.*", "**/node_modules/**"],
            "rewrites": [{ "source": "**", "destination": "/index.html" }]
        }
    });

    if services.contains(&FirebaseService::Database) {
        config["firestore"] = json!({
            "rules": "firestore.rules",
            "indexes": "firestore.indexes.json"
        });
        project.write("firestore.rules", FIRESTORE_RULES)?;
        project.write(
            "firestore.indexes.json",
            &to_json(&json!({ "indexes": [], "fieldOverrides": [] }))?,
        )?;
    }
    if services.contains(&FirebaseService::Storage) {
        config["storage"] = json!({ "rules": "storage.rules" });
        project.write("storage.rules", STORAGE_RULES)?;
    }

    project.write("firebase.json", &to_json(&config)?)
}

fn auth_hook(layout: Layout) -> String {
    let value = ui::hook_object(&[
        "user",
        "signup",
        "login",
        "loginWithGoogle",
        "logout",
        "resetPassword",
    ]);
    format!(
        "{}{}",
        layout.client_directive(),
        fill(AUTH_HOOK, &[("VALUE", &value)])
    )
}

fn firestore_hook(layout: Layout) -> String {
    format!(
        "{}{}",
        layout.client_directive(),
        fill(
            FIRESTORE_HOOK,
            &[
                ("DOCUMENT_RETURN", &hook_return(&[])),
                ("COLLECTION_RETURN", &hook_return(&[])),
                (
                    "CRUD_RETURN",
                    &hook_return(&["addDocument", "updateDocument", "deleteDocument", "getDocument"]),
                ),
            ],
        )
    )
}

fn storage_hook(layout: Layout) -> String {
    format!(
        "{}{}",
        layout.client_directive(),
        fill(
            STORAGE_HOOK,
            &[(
                "RETURN",
                &hook_return(&["progress", "uploadFile", "deleteFile", "getFileURL", "listFiles"]),
            )],
        )
    )
}

/// Email/password + Google login form, rendered with the project's UI primitives
fn login_form(ui: &Ui) -> String {
    let mut imports = Imports::new();
    imports.named("react", &["useState"]);
    imports.named("../../hooks/useAuth", &["useAuth"]);

    let name_input = ui::input(
        ui,
        &mut imports,
        "id=\"displayName\" type=\"text\" value={displayName} onChange={(e) => setDisplayName(e.target.value)} required",
    );
    let email_input = ui::input(
        ui,
        &mut imports,
        "id=\"email\" type=\"email\" value={email} onChange={(e) => setEmail(e.target.value)} required",
    );
    let password_input = ui::input(
        ui,
        &mut imports,
        "id=\"password\" type=\"password\" value={password} onChange={(e) => setPassword(e.target.value)} required",
    );
    let name_label = ui::label(ui, &mut imports, "displayName", "Name");
    let email_label = ui::label(ui, &mut imports, "email", "Email");
    let password_label = ui::label(ui, &mut imports, "password", "Password");
    let submit = ui::button(
        ui,
        &mut imports,
        "{loading ? 'Loading...' : isSignup ? 'Sign Up' : 'Login'}",
        "type=\"submit\" disabled={loading}",
        Variant::Primary,
    );
    let google = ui::button(
        ui,
        &mut imports,
        "Continue with Google",
        "type=\"button\" onClick={handleGoogleLogin} disabled={loading}",
        Variant::Outline,
    );
    let toggle = ui::button(
        ui,
        &mut imports,
        "{isSignup ? 'Login' : 'Sign up'}",
        "type=\"button\" onClick={() => setIsSignup(!isSignup)}",
        Variant::Ghost,
    );

    let jsx = fill(
        LOGIN_FORM_JSX,
        &[
            ("NAME_LABEL", &name_label),
            ("NAME_INPUT", &name_input),
            ("EMAIL_LABEL", &email_label),
            ("EMAIL_INPUT", &email_input),
            ("PASSWORD_LABEL", &password_label),
            ("PASSWORD_INPUT", &password_input),
            ("SUBMIT", &submit),
            ("GOOGLE", &google),
            ("TOGGLE", &toggle),
        ],
    );

    let body = format!(
        "export function LoginForm({{ onSuccess }}) {{\n{}\n\n  return (\n{}\n  );\n}}",
        ui::indent(LOGIN_FORM_SETUP, 2),
        ui::indent(&jsx, 4)
    );
    ui::module(ui, &imports, &[body])
}

const LOGIN_FORM_SETUP: &str = r#"const [email, setEmail] = useState('');
const [password, setPassword] = useState('');
const [displayName, setDisplayName] = useState('');
const [isSignup, setIsSignup] = useState(false);
const { login, signup, loginWithGoogle, error, loading } = useAuth();

const handleSubmit = async (e) => {
  e.preventDefault();
  try {
    if (isSignup) {
      await signup(email, password, displayName);
    } else {
      await login(email, password);
    }
    onSuccess?.();
  } catch (err) {
    console.error('Authentication error:', err);
  }
};

const handleGoogleLogin = async () => {
  try {
    await loginWithGoogle();
    onSuccess?.();
  } catch (err) {
    console.error('Google login error:', err);
  }
};"#;

const LOGIN_FORM_JSX: &str = r#"<div style={{ maxWidth: '400px', margin: '0 auto', padding: '2rem' }}>
  <h2 style={{ fontSize: '1.5rem', fontWeight: 600, marginBottom: '1rem' }}>
    {isSignup ? 'Sign Up' : 'Login'}
  </h2>

  {error && (
    <div style={{ color: '#ef4444', background: '#fef2f2', padding: '0.75rem', borderRadius: '0.5rem', marginBottom: '1rem' }}>
      {error}
    </div>
  )}

  <form onSubmit={handleSubmit} style={{ display: 'flex', flexDirection: 'column', gap: '1rem' }}>
    {isSignup && (
      <div>
        {{NAME_LABEL}}
        {{NAME_INPUT}}
      </div>
    )}
    <div>
      {{EMAIL_LABEL}}
      {{EMAIL_INPUT}}
    </div>
    <div>
      {{PASSWORD_LABEL}}
      {{PASSWORD_INPUT}}
    </div>
    {{SUBMIT}}
  </form>

  <div style={{ margin: '1rem 0', textAlign: 'center', color: '#6b7280' }}>or</div>
  {{GOOGLE}}

  <p style={{ textAlign: 'center', marginTop: '1rem' }}>
    {isSignup ? 'Already have an account? ' : "Don't have an account? "}
    {{TOGGLE}}
  </p>
</div>"#;

const PROTECTED_ROUTE: &str = r#"import { useAuth } from '../../hooks/useAuth';
import { LoginForm } from './LoginForm';

export function ProtectedRoute({ children }) {
  const { user, loading } = useAuth();

  if (loading) {
    return (
      <div style={{ display: 'flex', justifyContent: 'center', alignItems: 'center', height: '100vh' }}>
        Loading...
      </div>
    );
  }

  if (!user) {
    return <LoginForm />;
  }

  return children;
}
"#;

const AUTH_HOOK: &str = r#"import { createContext, useContext, useEffect, useState } from 'react';
import {
  createUserWithEmailAndPassword,
  GoogleAuthProvider,
  onAuthStateChanged,
  sendPasswordResetEmail,
  signInWithEmailAndPassword,
  signInWithPopup,
  signOut,
  updateProfile,
} from 'firebase/auth';
import { auth } from '../lib/firebase';

const AuthContext = createContext(null);

export function useAuth() {
  const context = useContext(AuthContext);
  if (!context) {
    throw new Error('useAuth must be used within an AuthProvider');
  }
  return context;
}

export function AuthProvider({ children }) {
  const [user, setUser] = useState(null);
  const [loading, setLoading] = useState(true);
  const [error, setError] = useState(null);

  useEffect(() => {
    const unsubscribe = onAuthStateChanged(auth, (current) => {
      setUser(current);
      setLoading(false);
    });
    return unsubscribe;
  }, []);

  const run = async (action) => {
    try {
      setError(null);
      return await action();
    } catch (err) {
      setError(err.message);
      throw err;
    }
  };

  const signup = (email, password, displayName) =>
    run(async () => {
      const result = await createUserWithEmailAndPassword(auth, email, password);
      if (displayName) {
        await updateProfile(result.user, { displayName });
      }
      return result;
    });

  const login = (email, password) => run(() => signInWithEmailAndPassword(auth, email, password));

  const loginWithGoogle = () => run(() => signInWithPopup(auth, new GoogleAuthProvider()));

  const logout = () => run(() => signOut(auth));

  const resetPassword = (email) => run(() => sendPasswordResetEmail(auth, email));

  const data = user;
  const value = {{VALUE}};

  return <AuthContext.Provider value={value}>{children}</AuthContext.Provider>;
}
"#;

const FIRESTORE_HOOK: &str = r#"import { useEffect, useState } from 'react';
import {
  addDoc,
  collection,
  deleteDoc,
  doc,
  getDoc,
  limit,
  onSnapshot,
  orderBy,
  query,
  updateDoc,
  where,
} from 'firebase/firestore';
import { db } from '../lib/firebase';

export function useDocument(collectionName, docId) {
  const [data, setData] = useState(null);
  const [loading, setLoading] = useState(true);
  const [error, setError] = useState(null);

  useEffect(() => {
    if (!docId) {
      setLoading(false);
      return undefined;
    }
    return onSnapshot(
      doc(db, collectionName, docId),
      (snapshot) => {
        setData(snapshot.exists() ? { id: snapshot.id, ...snapshot.data() } : null);
        setLoading(false);
      },
      (err) => {
        setError(err.message);
        setLoading(false);
      }
    );
  }, [collectionName, docId]);

  {{DOCUMENT_RETURN}}
}

export function useCollection(collectionName, options = {}) {
  const [data, setData] = useState([]);
  const [loading, setLoading] = useState(true);
  const [error, setError] = useState(null);
  const key = JSON.stringify(options);

  useEffect(() => {
    let q = collection(db, collectionName);
    if (options.where) {
      const [field, operator, value] = options.where;
      q = query(q, where(field, operator, value));
    }
    if (options.orderBy) {
      const [field, direction = 'asc'] = options.orderBy;
      q = query(q, orderBy(field, direction));
    }
    if (options.limit) {
      q = query(q, limit(options.limit));
    }

    return onSnapshot(
      q,
      (snapshot) => {
        setData(snapshot.docs.map((d) => ({ id: d.id, ...d.data() })));
        setLoading(false);
      },
      (err) => {
        setError(err.message);
        setLoading(false);
      }
    );
    // eslint-disable-next-line react-hooks/exhaustive-deps
  }, [collectionName, key]);

  {{COLLECTION_RETURN}}
}

export function useFirestore(collectionName) {
  const [data, setData] = useState(null);
  const [loading, setLoading] = useState(false);
  const [error, setError] = useState(null);

  const run = async (action) => {
    try {
      setLoading(true);
      setError(null);
      const result = await action();
      setData(result ?? null);
      return result;
    } catch (err) {
      setError(err.message);
      throw err;
    } finally {
      setLoading(false);
    }
  };

  const addDocument = (values) =>
    run(async () => {
      const ref = await addDoc(collection(db, collectionName), {
        ...values,
        createdAt: new Date(),
        updatedAt: new Date(),
      });
      return ref.id;
    });

  const updateDocument = (docId, values) =>
    run(() => updateDoc(doc(db, collectionName, docId), { ...values, updatedAt: new Date() }));

  const deleteDocument = (docId) => run(() => deleteDoc(doc(db, collectionName, docId)));

  const getDocument = (docId) =>
    run(async () => {
      const snapshot = await getDoc(doc(db, collectionName, docId));
      return snapshot.exists() ? { id: snapshot.id, ...snapshot.data() } : null;
    });

  {{CRUD_RETURN}}
}
"#;

const STORAGE_HOOK: &str = r#"import { useState } from 'react';
import { deleteObject, getDownloadURL, listAll, ref, uploadBytesResumable } from 'firebase/storage';
import { storage } from '../lib/firebase';

export function useStorage() {
  const [data, setData] = useState(null);
  const [loading, setLoading] = useState(false);
  const [error, setError] = useState(null);
  const [progress, setProgress] = useState(0);

  const uploadFile = (file, path) =>
    new Promise((resolve, reject) => {
      setLoading(true);
      setError(null);
      setProgress(0);

      const task = uploadBytesResumable(ref(storage, path), file);
      task.on(
        'state_changed',
        (snapshot) => setProgress((snapshot.bytesTransferred / snapshot.totalBytes) * 100),
        (err) => {
          setError(err.message);
          setLoading(false);
          reject(err);
        },
        async () => {
          try {
            const url = await getDownloadURL(task.snapshot.ref);
            const uploaded = { url, path, size: task.snapshot.totalBytes, name: file.name };
            setData(uploaded);
            resolve(uploaded);
          } catch (err) {
            setError(err.message);
            reject(err);
          } finally {
            setLoading(false);
          }
        }
      );
    });

  const deleteFile = async (path) => {
    setError(null);
    try {
      await deleteObject(ref(storage, path));
    } catch (err) {
      setError(err.message);
      throw err;
    }
  };

  const getFileURL = async (path) => {
    setError(null);
    try {
      return await getDownloadURL(ref(storage, path));
    } catch (err) {
      setError(err.message);
      throw err;
    }
  };

  const listFiles = async (path) => {
    setError(null);
    try {
      const result = await listAll(ref(storage, path));
      return await Promise.all(
        result.items.map(async (item) => ({
          name: item.name,
          path: item.fullPath,
          url: await getDownloadURL(item),
        }))
      );
    } catch (err) {
      setError(err.message);
      throw err;
    }
  };

  {{RETURN}}
}
"#;

const FIRESTORE_UTILS: &str = r#"import {
  addDoc,
  collection,
  deleteDoc,
  doc,
  getDoc,
  getDocs,
  limit,
  orderBy,
  query,
  startAfter,
  Timestamp,
  updateDoc,
  where,
} from 'firebase/firestore';
import { db } from '../lib/firebase';

const buildQuery = (collectionName, options = {}) => {
  let q = collection(db, collectionName);
  if (options.where) {
    const [field, operator, value] = options.where;
    q = query(q, where(field, operator, value));
  }
  if (options.orderBy) {
    const [field, direction = 'asc'] = options.orderBy;
    q = query(q, orderBy(field, direction));
  }
  if (options.startAfter) {
    q = query(q, startAfter(options.startAfter));
  }
  if (options.limit) {
    q = query(q, limit(options.limit));
  }
  return q;
};

export const firestoreAPI = {
  async create(collectionName, data) {
    const ref = await addDoc(collection(db, collectionName), {
      ...data,
      createdAt: Timestamp.now(),
      updatedAt: Timestamp.now(),
    });
    return ref.id;
  },

  async getById(collectionName, id) {
    const snapshot = await getDoc(doc(db, collectionName, id));
    return snapshot.exists() ? { id: snapshot.id, ...snapshot.data() } : null;
  },

  async getAll(collectionName, options = {}) {
    const snapshot = await getDocs(buildQuery(collectionName, options));
    return snapshot.docs.map((d) => ({ id: d.id, ...d.data() }));
  },

  async update(collectionName, id, data) {
    await updateDoc(doc(db, collectionName, id), { ...data, updatedAt: Timestamp.now() });
  },

  async delete(collectionName, id) {
    await deleteDoc(doc(db, collectionName, id));
  },

  async getPaginated(collectionName, options = {}) {
    const snapshot = await getDocs(buildQuery(collectionName, options));
    const docs = snapshot.docs.map((d) => ({ id: d.id, ...d.data() }));
    return {
      docs,
      lastVisible: snapshot.docs[snapshot.docs.length - 1],
      hasMore: docs.length === options.limit,
    };
  },
};

export const createTimestamp = () => Timestamp.now();
export const timestampToDate = (timestamp) => timestamp?.toDate();
export const dateToTimestamp = (date) => Timestamp.fromDate(date);
"#;

const STORAGE_UTILS: &str = r#"import { deleteObject, getDownloadURL, getMetadata, listAll, ref, uploadBytes } from 'firebase/storage';
import { storage } from '../lib/firebase';

export const storageAPI = {
  async uploadFile(file, path) {
    const snapshot = await uploadBytes(ref(storage, path), file);
    const metadata = await getMetadata(snapshot.ref);
    return {
      url: await getDownloadURL(snapshot.ref),
      path,
      size: metadata.size,
      name: metadata.name,
      contentType: metadata.contentType,
    };
  },

  async deleteFile(path) {
    await deleteObject(ref(storage, path));
  },

  async getFileURL(path) {
    return getDownloadURL(ref(storage, path));
  },

  async listFiles(path) {
    const result = await listAll(ref(storage, path));
    return Promise.all(
      result.items.map(async (item) => ({
        name: item.name,
        path: item.fullPath,
        url: await getDownloadURL(item),
      }))
    );
  },
};

export const generateStoragePath = (userId, folder, fileName) => {
  const clean = fileName.replace(/[^a-zA-Z0-9.-]/g, '_');
  return `users/${userId}/${folder}/${Date.now()}_${clean}`;
};

export const isImageFile = (file) =>
  ['jpg', 'jpeg', 'png', 'gif', 'webp', 'svg'].includes(file.name.split('.').pop().toLowerCase());

export const formatFileSize = (bytes) => {
  if (bytes === 0) return '0 Bytes';
  const sizes = ['Bytes', 'KB', 'MB', 'GB'];
  const i = Math.floor(Math.log(bytes) / Math.log(1024));
  return `${parseFloat((bytes / 1024 ** i).toFixed(2))} ${sizes[i]}`;
};
"#;

const FIRESTORE_RULES: &str = r#"rules_version = '2';
service cloud.firestore {
  match /databases/{database}/documents {
    match /users/{userId} {
      allow read, write: if request.auth != null && request.auth.uid == userId;
    }

    match /posts/{postId} {
      allow read: if true;
      allow write: if request.auth != null;
    }
  }
}
"#;

const STORAGE_RULES: &str = r#"rules_version = '2';
service firebase.storage {
  match /b/{bucket}/o {
    match /{allPaths=**} {
      allow read, write: if request.auth != null;
    }
  }
}
"#;
